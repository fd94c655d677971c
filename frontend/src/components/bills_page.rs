use web_sys::Element;
use yew::prelude::*;

use crate::components::ReceiptModal;
use crate::controllers::bills::{BillRow, ReceiptPreview};
use crate::hooks::use_bills::use_bills;
use crate::services::Services;

const FALLBACK_MODAL_WIDTH: f64 = 800.0;

#[derive(Properties, PartialEq)]
pub struct BillsPageProps {
    pub services: Services,
    pub on_navigate: Callback<String>,
}

#[function_component(BillsPage)]
pub fn bills_page(props: &BillsPageProps) -> Html {
    let bills = use_bills(&props.services, &props.on_navigate);
    let preview = use_state(|| Option::<ReceiptPreview>::None);
    let page_ref = use_node_ref();

    let on_new_bill = {
        let controller = bills.controller.clone();
        Callback::from(move |_: MouseEvent| controller.handle_click_new_bill())
    };

    let on_icon_eye = {
        let controller = bills.controller.clone();
        let preview = preview.clone();
        let page_ref = page_ref.clone();
        Callback::from(move |bill_url: Option<String>| {
            let modal_width = page_ref
                .cast::<Element>()
                .map(|page| f64::from(page.client_width()))
                .filter(|width| *width > 0.0)
                .unwrap_or(FALLBACK_MODAL_WIDTH);
            preview.set(Some(controller.handle_click_icon_eye(bill_url.as_deref(), modal_width)));
        })
    };

    let on_close_modal = {
        let preview = preview.clone();
        Callback::from(move |_: ()| preview.set(None))
    };

    let body = if bills.state.loading {
        html! { <div id="loading">{"Loading..."}</div> }
    } else if let Some(error) = bills.state.error.as_ref() {
        let on_retry = {
            let refresh = bills.refresh.clone();
            Callback::from(move |_: MouseEvent| refresh.emit(()))
        };
        html! {
            <div class="error-message" data-testid="error-message">
                {format!("Erreur : {}", error)}
                <button type="button" class="btn btn-secondary" onclick={on_retry}>{"Réessayer"}</button>
            </div>
        }
    } else {
        html! {
            <table id="example" class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th>{"Nom"}</th>
                        <th>{"Date"}</th>
                        <th>{"Montant"}</th>
                        <th>{"Statut"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody data-testid="tbody">
                    {for bills.state.rows.iter().map(|row| bill_row(row, &on_icon_eye))}
                </tbody>
            </table>
        }
    };

    html! {
        <div class="content" ref={page_ref}>
            <div class="content-header">
                <div class="content-title">{"Mes notes de frais"}</div>
                <button type="button" data-testid="btn-new-bill" class="btn btn-primary" onclick={on_new_bill}>
                    {"Nouvelle note de frais"}
                </button>
            </div>
            <div id="data-table">{body}</div>
            <ReceiptModal preview={(*preview).clone()} on_close={on_close_modal} />
        </div>
    }
}

fn bill_row(row: &BillRow, on_icon_eye: &Callback<Option<String>>) -> Html {
    let amount = row
        .bill
        .amount
        .map(|amount| format!("{} €", amount))
        .unwrap_or_default();
    let bill_url = row.bill.file_url.clone().unwrap_or_else(|| "null".to_string());
    // events are delegated to the app root, so the row hands over its own URL
    let on_click = {
        let on_icon_eye = on_icon_eye.clone();
        let file_url = row.bill.file_url.clone();
        Callback::from(move |_: MouseEvent| on_icon_eye.emit(file_url.clone()))
    };

    html! {
        <tr key={row.bill.id.clone().unwrap_or_default()}>
            <td>{&row.bill.expense_type}</td>
            <td>{&row.bill.name}</td>
            <td>{&row.date}</td>
            <td>{amount}</td>
            <td>{&row.status}</td>
            <td>
                <div class="icon-actions">
                    <div id="eye" data-testid="icon-eye" data-bill-url={bill_url} onclick={on_click}>
                        {"👁"}
                    </div>
                </div>
            </td>
        </tr>
    }
}
