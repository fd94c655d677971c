use yew::prelude::*;

use crate::controllers::bills::ReceiptPreview;

#[derive(Properties, PartialEq)]
pub struct ReceiptModalProps {
    pub preview: Option<ReceiptPreview>,
    pub on_close: Callback<()>,
}

#[function_component(ReceiptModal)]
pub fn receipt_modal(props: &ReceiptModalProps) -> Html {
    let Some(preview) = props.preview.as_ref() else {
        return html! {};
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal fade show" id="modaleFile" tabindex="-1" role="dialog" style="display: block;">
            <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Justificatif"}</h5>
                        <button type="button" class="close" aria-label="Close" onclick={on_close}>
                            <span aria-hidden="true">{"×"}</span>
                        </button>
                    </div>
                    <div class="modal-body">
                        <div style="text-align: center;" class={classes!("bill-proof-container", preview.placeholder.then_some("no-receipt"))}>
                            <img
                                width={preview.width.to_string()}
                                src={preview.src.clone()}
                                alt={preview.alt}
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
