use crate::i18n::{fmt_date, fmt_number, fmt_time, t};
use std::rc::Rc;
use yatzy_game::{GameHistoryEntry, high_scores, overall_ranking};
use yew::prelude::*;

const HIGH_SCORE_LIMIT: usize = 10;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub history: Rc<Vec<GameHistoryEntry>>,
    pub on_clear_history: Callback<()>,
}

fn high_score_section(history: &[GameHistoryEntry]) -> Html {
    let top = high_scores(history, HIGH_SCORE_LIMIT);
    html! {
        <section class="high-scores">
            <h2>{ t("title.high_score") }</h2>
            if top.is_empty() {
                <p class="empty-state">{ t("empty.no_high_scores") }</p>
            } else {
                <ol>
                    { for top.into_iter().map(|score| html! {
                        <li class="high-score">
                            <span class="name">{ score.player_name }</span>
                            <span class="total">{ score.total.to_string() }</span>
                            <span class="date">{ fmt_date(score.date) }</span>
                        </li>
                    }) }
                </ol>
            }
        </section>
    }
}

fn overall_section(history: &[GameHistoryEntry]) -> Html {
    let standings = overall_ranking(history);
    if standings.is_empty() {
        return Html::default();
    }
    html! {
        <section class="overall-ranking">
            <h2>{ t("title.overall_ranking") }</h2>
            <table>
                <thead>
                    <tr>
                        <th scope="col">{ t("ui.rank") }</th>
                        <th scope="col">{ t("ui.player") }</th>
                        <th scope="col">{ t("label.wins") }</th>
                        <th scope="col">{ t("label.games") }</th>
                        <th scope="col">{ t("label.best") }</th>
                        <th scope="col">{ t("label.average") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for standings.iter().enumerate().map(|(idx, s)| html! {
                        <tr class="standing">
                            <td>{ (idx + 1).to_string() }</td>
                            <td>{ s.player_name.clone() }</td>
                            <td>{ s.wins.to_string() }</td>
                            <td>{ s.games.to_string() }</td>
                            <td>{ s.best.to_string() }</td>
                            <td>{ fmt_number(s.average()) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}

fn game_card(entry: &GameHistoryEntry) -> Html {
    let winning = entry.winning_total();
    html! {
        <li class="history-entry" data-id={entry.id.clone()}>
            <div class="history-entry__meta">
                <span class="date">{ fmt_date(entry.date) }</span>
                <span class="time">{ fmt_time(entry.timestamp) }</span>
            </div>
            <ul class="history-entry__results">
                { for entry.results.iter().map(|r| {
                    let class = if Some(r.total) == winning && r.total > 0 {
                        "result winner"
                    } else {
                        "result"
                    };
                    html! {
                        <li class={class}>
                            <span class="name">{ r.player_name.clone() }</span>
                            <span class="total">{ r.total.to_string() }</span>
                        </li>
                    }
                }) }
            </ul>
        </li>
    }
}

#[function_component(HistoryPanel)]
pub fn history_panel(p: &Props) -> Html {
    let clear = {
        let cb = p.on_clear_history.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="history-panel" id="main" role="main">
            { high_score_section(&p.history) }
            { overall_section(&p.history) }
            <section class="game-history">
                <h2>{ t("title.game_history") }</h2>
                if p.history.is_empty() {
                    <p class="empty-state">{ t("empty.no_game_history") }</p>
                } else {
                    <ol class="history-list">
                        { for p.history.iter().map(game_card) }
                    </ol>
                    <button type="button" class="btn btn-danger clear-history-btn" onclick={clear}>
                        { t("action.clear_history") }
                    </button>
                }
            </section>
        </section>
    }
}
