use chrono::{TimeZone, Utc};
use futures::executor::block_on;
use std::rc::Rc;
use yatzy_game::{
    BonusRule, Category, GameHistoryEntry, GameState, Language, Player, PlayerId, ScoreInput,
};
use yatzy_web::app::state::use_app_state;
use yatzy_web::app::view::render_app;
use yatzy_web::components::confirm_dialog::ConfirmDialog;
use yatzy_web::components::footer::Footer;
use yatzy_web::components::header::Header;
use yatzy_web::components::history_panel::HistoryPanel;
use yatzy_web::components::modal::Modal;
use yatzy_web::components::player_dialog::PlayerDialog;
use yatzy_web::components::ranking::Ranking;
use yatzy_web::components::score_entry::ScoreEntry;
use yatzy_web::components::scoreboard::Scoreboard;
use yatzy_web::router::Route;
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn english() {
    yatzy_web::i18n::set_lang(Language::En);
}

fn player(id: &str, name: &str, entries: &[(Category, ScoreInput)]) -> Player {
    let mut player = Player::new(PlayerId::from(id), name);
    for (category, input) in entries {
        player.apply(*category, *input);
    }
    player
}

fn sample_game() -> Rc<GameState> {
    Rc::new(GameState {
        players: vec![
            player(
                "a",
                "Ada",
                &[
                    (Category::Ones, ScoreInput::Value(3)),
                    (Category::Twos, ScoreInput::Value(6)),
                    (Category::Threes, ScoreInput::Value(9)),
                    (Category::Fours, ScoreInput::Value(12)),
                    (Category::Fives, ScoreInput::Value(15)),
                    (Category::Sixes, ScoreInput::Value(18)),
                    (Category::Yatzy, ScoreInput::Value(50)),
                ],
            ),
            player(
                "b",
                "Bo",
                &[
                    (Category::Chance, ScoreInput::Value(22)),
                    (Category::Yatzy, ScoreInput::Skip),
                ],
            ),
        ],
    })
}

#[test]
fn header_renders_title_nav_and_languages() {
    english();
    let props = yatzy_web::components::header::Props {
        current_lang: Language::Fr,
        on_lang_change: Callback::noop(),
        active: Route::History,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Yatzy Score Dashboard"));
    assert!(html.contains("lang-select"));
    for name in ["English", "Deutsch", "Italiano"] {
        assert!(html.contains(name), "missing language option {name}");
    }
    assert!(html.contains("nav-link active"));
    assert!(html.contains("href=\"#main\""));
}

#[test]
fn footer_renders_note() {
    english();
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer>"));
    assert!(html.contains("saved in this browser"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    english();
    let open_props = yatzy_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Title"),
        description: Some(AttrValue::from("Desc")),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Desc"));
    assert!(html.contains("aria-label=\"Close\""));

    let closed_props = yatzy_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Title"),
        description: None,
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn scoreboard_shows_sheets_totals_and_markers() {
    english();
    let props = yatzy_web::components::scoreboard::Props {
        state: sample_game(),
        rule: BonusRule::default(),
        on_cell: Callback::noop(),
        on_player: Callback::noop(),
        on_add_player: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Scoreboard>::with_props(props).render());
    assert!(html.contains("Ada"));
    assert!(html.contains("Bo"));
    assert!(html.contains("Full House"));
    assert!(html.contains("score-cell skipped"));
    assert!(html.contains("\u{2013}"));
    // 63 in the top section earns the 35 bonus: 63 + 35 + 50
    assert!(html.contains(">63<"));
    assert!(html.contains(">35<"));
    assert!(html.contains(">148<"));
    assert!(html.contains("add-player-btn"));
    assert!(html.contains("id=\"main\""));
}

#[test]
fn ranking_orders_players_by_total() {
    english();
    let props = yatzy_web::components::ranking::Props {
        state: sample_game(),
        rule: BonusRule::default(),
    };
    let html = block_on(LocalServerRenderer::<Ranking>::with_props(props).render());
    let ada = html.find("Ada").expect("Ada listed");
    let bo = html.find("Bo").expect("Bo listed");
    assert!(ada < bo);
    assert!(html.contains("data-rank=\"1\""));
    assert!(html.contains("data-rank=\"2\""));
}

#[test]
fn score_entry_offers_multipliers_for_top_categories() {
    english();
    let props = yatzy_web::components::score_entry::Props {
        open: true,
        player_name: AttrValue::from("Ada"),
        category: Category::Fours,
        current: None,
        on_submit: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ScoreEntry>::with_props(props).render());
    assert!(html.contains("Ada"));
    assert!(html.contains("Fours"));
    assert!(html.contains("5 \u{d7} 4 = 20"));
    assert!(html.contains("skip-btn"));
    assert!(!html.contains("clear-btn"));
}

#[test]
fn score_entry_uses_number_pad_for_chance_and_unskip_for_markers() {
    english();
    let props = yatzy_web::components::score_entry::Props {
        open: true,
        player_name: AttrValue::from("Bo"),
        category: Category::Chance,
        current: Some(None),
        on_submit: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ScoreEntry>::with_props(props).render());
    assert!(html.contains("number-pad"));
    assert!(html.contains("Enter the scored value"));
    assert!(html.contains("unskip-btn"));
}

#[test]
fn player_dialog_disables_moves_at_the_edges() {
    english();
    let props = yatzy_web::components::player_dialog::Props {
        open: true,
        name: AttrValue::from("Ada"),
        index: 0,
        player_count: 1,
        on_save: Callback::noop(),
        on_remove: Callback::noop(),
        on_move: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PlayerDialog>::with_props(props).render());
    assert!(html.contains("Edit Player Name"));
    assert!(html.contains("player-name-input"));
    assert!(html.contains("Remove Player"));
    assert!(html.contains("disabled"));

    let props = yatzy_web::components::player_dialog::Props {
        open: true,
        name: AttrValue::from("Bo"),
        index: 1,
        player_count: 3,
        on_save: Callback::noop(),
        on_remove: Callback::noop(),
        on_move: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PlayerDialog>::with_props(props).render());
    assert!(!html.contains("disabled"));
}

#[test]
fn confirm_dialog_renders_message_and_actions() {
    english();
    let props = yatzy_web::components::confirm_dialog::Props {
        open: true,
        title: AttrValue::from("Delete Game History"),
        message: AttrValue::from("Really?"),
        confirm_label: AttrValue::from("Delete History"),
        on_confirm: Callback::noop(),
        on_cancel: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmDialog>::with_props(props).render());
    assert!(html.contains("Really?"));
    assert!(html.contains("confirm-btn"));
    assert!(html.contains("Cancel"));
}

#[test]
fn history_panel_shows_empty_states() {
    english();
    let props = yatzy_web::components::history_panel::Props {
        history: Rc::new(Vec::new()),
        on_clear_history: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HistoryPanel>::with_props(props).render());
    assert!(html.contains("No game history available"));
    assert!(html.contains("No high scores yet"));
    assert!(!html.contains("clear-history-btn"));
}

#[test]
fn history_panel_lists_games_and_standings() {
    english();
    let now = Utc.with_ymd_and_hms(2025, 5, 17, 18, 30, 0).single().expect("valid time");
    let game = sample_game();
    let entry = GameHistoryEntry::snapshot("g1".into(), now, &game.players, &BonusRule::default());
    let props = yatzy_web::components::history_panel::Props {
        history: Rc::new(vec![entry]),
        on_clear_history: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HistoryPanel>::with_props(props).render());
    assert!(html.contains("2025-05-17"));
    assert!(html.contains("18:30"));
    assert!(html.contains("result winner"));
    assert!(html.contains("Overall Ranking"));
    assert!(html.contains("148.0"));
    assert!(html.contains("clear-history-btn"));
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    route: Route,
}

#[function_component(Shell)]
fn shell(p: &ShellProps) -> Html {
    let state = use_app_state();
    render_app(&state, Some(&p.route), None)
}

#[test]
fn app_shell_starts_with_one_default_player() {
    english();
    let html = block_on(
        LocalServerRenderer::<Shell>::with_props(ShellProps { route: Route::Home }).render(),
    );
    assert!(html.contains("Player 1"));
    assert!(html.contains("new-game-btn"));
    assert!(html.contains("clear-scoreboard-btn"));
    assert!(html.contains("ranking-list"));
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn app_shell_routes_to_history() {
    english();
    let html = block_on(
        LocalServerRenderer::<Shell>::with_props(ShellProps {
            route: Route::History,
        })
        .render(),
    );
    assert!(html.contains("Game History"));
    assert!(!html.contains("score-table"));
}
