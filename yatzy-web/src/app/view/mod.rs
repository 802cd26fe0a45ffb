mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::{AppState, ConfirmAction, Dialog};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::history_panel::HistoryPanel;
use crate::components::player_dialog::PlayerDialog;
use crate::components::ranking::Ranking;
use crate::components::score_entry::ScoreEntry;
use crate::components::scoreboard::Scoreboard;
use crate::i18n::t;
use crate::router::Route;
use yatzy_game::BonusRule;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let rule = *state.store.borrow().bonus_rule();
    let active = match route {
        Some(Route::History) => Route::History,
        _ => Route::Home,
    };
    let main_view = match active {
        Route::History => html! {
            <HistoryPanel
                history={(*state.history).clone()}
                on_clear_history={handlers.request_confirm.reform(|()| ConfirmAction::ClearHistory)}
            />
        },
        _ => render_home(state, &handlers, rule),
    };

    html! {
        <>
            <Header
                current_lang={*state.language}
                on_lang_change={handlers.lang_change.clone()}
                active={active}
                on_navigate={handlers.navigate.clone()}
            />
            { main_view }
            <Footer />
            { render_dialog(state, &handlers) }
        </>
    }
}

fn render_home(state: &AppState, handlers: &AppHandlers, rule: BonusRule) -> Html {
    let ask = |action: ConfirmAction| {
        let cb = handlers.request_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(action))
    };
    html! {
        <>
            <Scoreboard
                state={(*state.game).clone()}
                rule={rule}
                on_cell={handlers.open_cell.clone()}
                on_player={handlers.open_player.clone()}
                on_add_player={handlers.add_player.clone()}
            />
            <div class="game-actions">
                <button type="button" class="btn btn-primary new-game-btn" onclick={ask(ConfirmAction::NewGame)}>
                    { t("action.new_game") }
                </button>
                <button type="button" class="btn btn-danger clear-scoreboard-btn" onclick={ask(ConfirmAction::ClearScoreboard)}>
                    { t("action.clear_scoreboard") }
                </button>
            </div>
            <Ranking state={(*state.game).clone()} rule={rule} />
        </>
    }
}

fn render_dialog(state: &AppState, handlers: &AppHandlers) -> Html {
    match &*state.dialog {
        Dialog::Closed => Html::default(),
        Dialog::Score { player, category } => {
            let Some(found) = state.game.find(player) else {
                return Html::default();
            };
            html! {
                <ScoreEntry
                    open={true}
                    player_name={AttrValue::from(found.name.clone())}
                    category={*category}
                    current={found.scores.get(category).copied()}
                    on_submit={handlers.submit_score.clone()}
                    on_close={handlers.close_dialog.clone()}
                />
            }
        }
        Dialog::Player(id) => {
            let Some(index) = state.game.position(id) else {
                return Html::default();
            };
            let name = state.game.players[index].name.clone();
            html! {
                <PlayerDialog
                    open={true}
                    name={AttrValue::from(name)}
                    index={index}
                    player_count={state.game.players.len()}
                    on_save={handlers.rename_player.clone()}
                    on_remove={handlers.remove_player.clone()}
                    on_move={handlers.move_player.clone()}
                    on_close={handlers.close_dialog.clone()}
                />
            }
        }
        Dialog::Confirm(action) => html! {
            <ConfirmDialog
                open={true}
                title={t(action.title_key())}
                message={t(action.message_key())}
                confirm_label={t(action.confirm_key())}
                on_confirm={handlers.confirm.clone()}
                on_cancel={handlers.close_dialog.clone()}
            />
        },
    }
}
