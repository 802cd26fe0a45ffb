use crate::app::state::{AppState, ConfirmAction, Dialog};
use crate::confetti::ConfettiHandle;
use crate::router::Route;
use std::cell::RefCell;
use yatzy_game::{Category, Language, PlayerId, ScoreInput, is_celebration};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub open_cell: Callback<(PlayerId, Category)>,
    pub open_player: Callback<PlayerId>,
    pub add_player: Callback<()>,
    pub submit_score: Callback<ScoreInput>,
    pub rename_player: Callback<String>,
    pub remove_player: Callback<()>,
    pub move_player: Callback<usize>,
    pub request_confirm: Callback<ConfirmAction>,
    pub confirm: Callback<()>,
    pub close_dialog: Callback<()>,
    pub lang_change: Callback<Language>,
    pub navigate: Callback<Route>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            open_cell: build_open_cell(state),
            open_player: build_open_player(state),
            add_player: build_add_player(state),
            submit_score: build_submit_score(state),
            rename_player: build_rename_player(state),
            remove_player: build_remove_player(state),
            move_player: build_move_player(state),
            request_confirm: build_request_confirm(state),
            confirm: build_confirm(state),
            close_dialog: build_close_dialog(state),
            lang_change: build_lang_change(state),
            navigate: build_navigate(navigator),
        }
    }
}

fn build_open_cell(state: &AppState) -> Callback<(PlayerId, Category)> {
    let dialog = state.dialog.clone();
    Callback::from(move |(player, category): (PlayerId, Category)| {
        if !category.is_derived() {
            dialog.set(Dialog::Score { player, category });
        }
    })
}

fn build_open_player(state: &AppState) -> Callback<PlayerId> {
    let dialog = state.dialog.clone();
    Callback::from(move |player: PlayerId| dialog.set(Dialog::Player(player)))
}

fn build_add_player(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    Callback::from(move |()| {
        let id = store.borrow_mut().add_player();
        log::debug!("Added player {id}");
    })
}

/// Replace any running burst and play the clip.
fn celebrate(slot: &RefCell<Option<ConfettiHandle>>) {
    let mut slot = slot.borrow_mut();
    if let Some(previous) = slot.take() {
        previous.stop();
    }
    *slot = crate::confetti::launch();
    crate::audio::play_yatzy_sound();
}

fn build_submit_score(state: &AppState) -> Callback<ScoreInput> {
    let store = state.store.clone();
    let dialog = state.dialog.clone();
    let confetti = state.confetti.clone();
    Callback::from(move |input: ScoreInput| {
        let Dialog::Score { player, category } = (*dialog).clone() else {
            return;
        };
        let outcome = store.borrow_mut().set_score(&player, category, input);
        match outcome {
            Ok(()) => {
                if is_celebration(category, input) {
                    celebrate(&confetti);
                }
                dialog.set(Dialog::Closed);
            }
            Err(err) => log::warn!("Score not recorded: {err}"),
        }
    })
}

fn build_rename_player(state: &AppState) -> Callback<String> {
    let store = state.store.clone();
    let dialog = state.dialog.clone();
    Callback::from(move |name: String| {
        if let Dialog::Player(id) = &*dialog {
            store.borrow_mut().update_player_name(id, &name);
        }
        dialog.set(Dialog::Closed);
    })
}

fn build_remove_player(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let dialog = state.dialog.clone();
    Callback::from(move |()| {
        if let Dialog::Player(id) = &*dialog {
            store.borrow_mut().remove_player(id);
        }
        dialog.set(Dialog::Closed);
    })
}

fn build_move_player(state: &AppState) -> Callback<usize> {
    let store = state.store.clone();
    let dialog = state.dialog.clone();
    Callback::from(move |to_index: usize| {
        if let Dialog::Player(id) = &*dialog {
            store.borrow_mut().move_player(id, to_index);
        }
    })
}

fn build_request_confirm(state: &AppState) -> Callback<ConfirmAction> {
    let dialog = state.dialog.clone();
    Callback::from(move |action: ConfirmAction| dialog.set(Dialog::Confirm(action)))
}

fn build_confirm(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Dialog::Confirm(action) = *state.dialog else {
            return;
        };
        match action {
            ConfirmAction::NewGame => {
                let archived = state.store.borrow_mut().clear_game();
                if let Some(entry) = archived {
                    log::info!("Archived game {} with {} players", entry.id, entry.results.len());
                }
                state.refresh_history();
            }
            ConfirmAction::ClearScoreboard => state.store.borrow_mut().clear_scoreboard(),
            ConfirmAction::ClearHistory => {
                state.store.borrow().clear_history();
                state.refresh_history();
            }
        }
        state.dialog.set(Dialog::Closed);
    })
}

fn build_close_dialog(state: &AppState) -> Callback<()> {
    let dialog = state.dialog.clone();
    Callback::from(move |()| dialog.set(Dialog::Closed))
}

fn build_lang_change(state: &AppState) -> Callback<Language> {
    let language = state.language.clone();
    Callback::from(move |lang: Language| {
        crate::i18n::set_lang(lang);
        language.set(lang);
    })
}

fn build_navigate(navigator: Option<Navigator>) -> Callback<Route> {
    Callback::from(move |route: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}
