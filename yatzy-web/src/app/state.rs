use crate::confetti::ConfettiHandle;
use crate::storage::BrowserStorage;
use std::cell::RefCell;
use std::rc::Rc;
use yatzy_game::{Category, GameHistoryEntry, GameState, GameStore, Language, PlayerId};
use yew::prelude::*;

pub type BrowserGameStore = GameStore<BrowserStorage>;

/// Confirmation prompts guarding destructive actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Archive the round and clear every sheet
    NewGame,
    /// Drop every player, nothing archived
    ClearScoreboard,
    ClearHistory,
}

impl ConfirmAction {
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::NewGame => "action.new_game",
            Self::ClearScoreboard => "title.clear_score_dashboard",
            Self::ClearHistory => "title.delete_game_history",
        }
    }

    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::NewGame => "confirm.new_game",
            Self::ClearScoreboard => "confirm.clear_scoreboard",
            Self::ClearHistory => "confirm.clear_history",
        }
    }

    #[must_use]
    pub const fn confirm_key(self) -> &'static str {
        match self {
            Self::NewGame => "action.new_game",
            Self::ClearScoreboard => "action.clear_scoreboard",
            Self::ClearHistory => "action.delete_history",
        }
    }
}

/// At most one dialog is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    Score {
        player: PlayerId,
        category: Category,
    },
    Player(PlayerId),
    Confirm(ConfirmAction),
}

#[derive(Clone)]
pub struct AppState {
    pub store: Rc<RefCell<BrowserGameStore>>,
    pub game: UseStateHandle<Rc<GameState>>,
    pub history: UseStateHandle<Rc<Vec<GameHistoryEntry>>>,
    pub language: UseStateHandle<Language>,
    pub dialog: UseStateHandle<Dialog>,
    pub confetti: Rc<RefCell<Option<ConfettiHandle>>>,
}

impl AppState {
    /// Re-read the archive after it changed.
    pub fn refresh_history(&self) {
        let entries = self.store.borrow().history();
        self.history.set(Rc::new(entries));
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    let store = use_mut_ref(|| {
        BrowserGameStore::new(BrowserStorage, crate::dom::entropy_seed())
    });
    let game = {
        let store = store.clone();
        use_state(move || store.borrow().state())
    };
    let history = {
        let store = store.clone();
        use_state(move || Rc::new(store.borrow().history()))
    };
    AppState {
        store,
        game,
        history,
        language: use_state(crate::i18n::current_lang),
        dialog: use_state(Dialog::default),
        confetti: use_mut_ref(|| None::<ConfettiHandle>),
    }
}

/// Mirror store snapshots into component state for the lifetime of the app.
#[hook]
pub fn use_store_sync(state: &AppState) {
    let store = state.store.clone();
    let game = state.game.clone();
    use_effect_with((), move |()| {
        let subscription = store
            .borrow()
            .subscribe(move |next| game.set(Rc::clone(next)));
        move || subscription.unsubscribe()
    });
}
