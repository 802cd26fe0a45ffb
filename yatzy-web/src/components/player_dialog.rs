use crate::components::modal::Modal;
use crate::i18n::t;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub name: AttrValue,
    /// Column of the player being edited
    pub index: usize,
    pub player_count: usize,
    pub on_save: Callback<String>,
    pub on_remove: Callback<()>,
    /// Target column for the player
    pub on_move: Callback<usize>,
    pub on_close: Callback<()>,
}

#[function_component(PlayerDialog)]
pub fn player_dialog(p: &Props) -> Html {
    let draft = use_state(|| p.name.to_string());
    let confirm_remove = use_state(|| false);
    {
        let draft = draft.clone();
        let confirm_remove = confirm_remove.clone();
        use_effect_with((p.name.clone(), p.open), move |(name, _)| {
            draft.set(name.to_string());
            confirm_remove.set(false);
            || {}
        });
    }

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                draft.set(input.value());
            }
        })
    };
    let save = {
        let cb = p.on_save.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let name = draft.trim();
            if !name.is_empty() {
                cb.emit(name.to_string());
            }
        })
    };
    let remove = {
        let cb = p.on_remove.clone();
        let confirm_remove = confirm_remove.clone();
        Callback::from(move |_: MouseEvent| {
            if *confirm_remove {
                cb.emit(());
            } else {
                confirm_remove.set(true);
            }
        })
    };
    let move_to = |target: usize| {
        let cb = p.on_move.clone();
        Callback::from(move |_: MouseEvent| cb.emit(target))
    };
    let cancel = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <Modal open={p.open} title={t("title.edit_player_name")} on_close={p.on_close.clone()}>
            <label for="player-name-input">{ t("label.player_name") }</label>
            <input id="player-name-input" type="text" value={(*draft).clone()}
                placeholder={t("label.enter_player_name")} oninput={on_input} />
            <div class="reorder-actions">
                <button type="button" class="btn move-left-btn" disabled={p.index == 0}
                    onclick={move_to(p.index.saturating_sub(1))}>{ t("action.move_left") }</button>
                <button type="button" class="btn move-right-btn" disabled={p.index + 1 >= p.player_count}
                    onclick={move_to(p.index + 1)}>{ t("action.move_right") }</button>
            </div>
            if *confirm_remove {
                <p class="modal__description" role="alert">{ t("confirm.remove_player") }</p>
            }
            <div class="dialog-actions">
                <button type="button" class="btn btn-danger remove-btn" onclick={remove}>
                    { if *confirm_remove { t("action.confirm_remove") } else { t("action.remove_player") } }
                </button>
                <button type="button" class="btn" onclick={cancel}>{ t("action.cancel") }</button>
                <button type="button" class="btn btn-primary save-btn" onclick={save}>{ t("action.save") }</button>
            </div>
        </Modal>
    }
}
