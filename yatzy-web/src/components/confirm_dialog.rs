use crate::components::modal::Modal;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(p: &Props) -> Html {
    let confirm = {
        let cb = p.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Modal open={p.open} title={p.title.clone()} description={Some(p.message.clone())} on_close={p.on_cancel.clone()}>
            <div class="dialog-actions">
                <button type="button" class="btn btn-secondary" onclick={cancel}>{ t("action.cancel") }</button>
                <button type="button" class="btn btn-danger confirm-btn" onclick={confirm}>{ p.confirm_label.clone() }</button>
            </div>
        </Modal>
    }
}
