use shared::EXPENSE_TYPES;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::controllers::bills::extract_file_extension;
use crate::controllers::new_bill::{FileChangeOutcome, FileSelection, NewBillFields, NewBillView};
use crate::controllers::NewBill;
use crate::services::Services;

/// Writes controller feedback into the page state
struct PageView {
    file_input: NodeRef,
    send_enabled: UseStateHandle<bool>,
    file_name: UseStateHandle<Option<String>>,
}

impl NewBillView for PageView {
    fn clear_file_input(&self) {
        if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    fn set_send_enabled(&self, enabled: bool) {
        self.send_enabled.set(enabled);
    }

    fn show_file_name(&self, file_name: &str) {
        self.file_name.set(Some(file_name.to_string()));
    }
}

#[derive(Default, Clone, PartialEq)]
struct FieldRefs {
    expense_type: NodeRef,
    name: NodeRef,
    amount: NodeRef,
    date: NodeRef,
    vat: NodeRef,
    pct: NodeRef,
    commentary: NodeRef,
}

impl FieldRefs {
    fn read(&self) -> NewBillFields {
        NewBillFields {
            expense_type: self
                .expense_type
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default(),
            name: input_value(&self.name),
            amount: input_value(&self.amount),
            date: input_value(&self.date),
            vat: input_value(&self.vat),
            pct: input_value(&self.pct),
            commentary: self
                .commentary
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default(),
        }
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NewBillPageProps {
    pub services: Services,
    pub on_navigate: Callback<String>,
}

#[function_component(NewBillPage)]
pub fn new_bill_page(props: &NewBillPageProps) -> Html {
    let send_enabled = use_state(|| false);
    let file_name = use_state(|| Option::<String>::None);
    let file_input = use_node_ref();
    let fields = use_memo((), |_| FieldRefs::default());

    let controller = {
        let services = props.services.clone();
        let on_navigate = props.on_navigate.clone();
        let view = PageView {
            file_input: file_input.clone(),
            send_enabled: send_enabled.clone(),
            file_name: file_name.clone(),
        };
        use_memo((), move |_| {
            NewBill::new(
                on_navigate,
                services.store,
                services.session,
                services.notifier,
                Rc::new(view),
            )
        })
    };

    let on_change_file = {
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            e.prevent_default();
            let input: HtmlInputElement = e.target_unchecked_into();
            let selection = FileSelection {
                value: input.value(),
                file: input.files().and_then(|files| files.get(0)),
            };

            let controller = controller.clone();
            spawn_local(async move {
                match controller.handle_change_file(selection).await {
                    FileChangeOutcome::Uploaded(receipt) => {
                        log::info!("Receipt uploaded: {:?}", receipt.file_url)
                    }
                    FileChangeOutcome::Rejected { file_name } => log::warn!(
                        "Rejected receipt {}: .{} files are not accepted",
                        file_name,
                        extract_file_extension(&file_name)
                    ),
                    FileChangeOutcome::UploadFailed(e) => log::error!("{}", e),
                    FileChangeOutcome::NotConfigured => {
                        log::warn!("No store configured, receipt not uploaded")
                    }
                }
            });
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let values = fields.read();

            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller.handle_submit(&values).await;
                match outcome.persisted {
                    Some(Ok(())) => log::info!("Bill {:?} saved", outcome.bill.name),
                    Some(Err(e)) => log::error!("{}", e),
                    None => log::warn!("No store configured, bill not saved"),
                }
            });
        })
    };

    html! {
        <div class="content">
            <div class="content-header">
                <div class="content-title">{"Envoyer une note de frais"}</div>
            </div>
            <div class="form-newbill-container content-inner">
                <form data-testid="form-new-bill" onsubmit={on_submit}>
                    <div class="row">
                        <div class="col-md-6">
                            <div class="col-half">
                                <label for="expense-type" class="bold-label">{"Type de dépense"}</label>
                                <select required={true} class="form-control blue-border" data-testid="expense-type" ref={fields.expense_type.clone()}>
                                    {for EXPENSE_TYPES.iter().map(|kind| html! { <option>{*kind}</option> })}
                                </select>
                            </div>
                            <div class="col-half">
                                <label for="expense-name" class="bold-label">{"Nom de la dépense"}</label>
                                <input type="text" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres" ref={fields.name.clone()} />
                            </div>
                            <div class="col-half">
                                <label for="datepicker" class="bold-label">{"Date"}</label>
                                <input required={true} type="date" class="form-control blue-border" data-testid="datepicker" ref={fields.date.clone()} />
                            </div>
                            <div class="col-half">
                                <label for="amount" class="bold-label">{"Montant TTC "}</label>
                                <input required={true} type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348" ref={fields.amount.clone()} />
                            </div>
                            <div class="col-half-row">
                                <div class="flex-col">
                                    <label for="vat" class="bold-label">{"TVA"}</label>
                                    <input type="number" class="form-control blue-border" data-testid="vat" placeholder="70" ref={fields.vat.clone()} />
                                </div>
                                <div class="flex-col">
                                    <input required={true} type="number" class="form-control blue-border" data-testid="pct" placeholder="20" ref={fields.pct.clone()} />
                                </div>
                            </div>
                        </div>
                        <div class="col-md-6">
                            <div class="col-half">
                                <label for="commentary" class="bold-label">{"Commentaire"}</label>
                                <textarea class="form-control blue-border" data-testid="commentary" rows="3" ref={fields.commentary.clone()} />
                            </div>
                            <div class="col-half">
                                <label for="file" class="bold-label">{"Justificatif"}</label>
                                <input required={true} type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file" ref={file_input} onchange={on_change_file} />
                                <span id="file-name">{(*file_name).clone().unwrap_or_default()}</span>
                            </div>
                        </div>
                    </div>
                    <div class="row">
                        <div class="col-md-6">
                            <div class="col-half">
                                <button type="submit" id="btn-send-bill" class="btn btn-primary" disabled={!*send_enabled}>
                                    {"Envoyer"}
                                </button>
                            </div>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
