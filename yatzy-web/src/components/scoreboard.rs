use crate::i18n::t;
use crate::theme::player_color;
use std::rc::Rc;
use yatzy_game::{BonusRule, Category, GameState, Player, PlayerId, PlayerTotals, totals};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub rule: BonusRule,
    pub on_cell: Callback<(PlayerId, Category)>,
    pub on_player: Callback<PlayerId>,
    pub on_add_player: Callback<()>,
}

fn cell_text(player: &Player, category: Category) -> (String, &'static str) {
    match player.scores.get(&category) {
        Some(Some(value)) => (value.to_string(), "score-cell scored"),
        Some(None) => ("\u{2013}".to_string(), "score-cell skipped"),
        None => (String::new(), "score-cell"),
    }
}

fn derived_row(
    label: String,
    class: &'static str,
    sheet: &[PlayerTotals],
    pick: fn(&PlayerTotals) -> String,
) -> Html {
    html! {
        <tr class={classes!("derived-row", class)}>
            <th scope="row">{ label }</th>
            { for sheet.iter().map(|totals| html! { <td class="derived-cell">{ pick(totals) }</td> }) }
        </tr>
    }
}

#[function_component(Scoreboard)]
pub fn scoreboard(p: &Props) -> Html {
    let sheet: Vec<PlayerTotals> = p.state.players.iter().map(|pl| totals(pl, &p.rule)).collect();

    let category_row = |category: Category| {
        html! {
            <tr class="category-row" data-category={category.key()}>
                <th scope="row">{ t(&category.i18n_key()) }</th>
                { for p.state.players.iter().enumerate().map(|(idx, player)| {
                    let (text, class) = cell_text(player, category);
                    let on_cell = p.on_cell.clone();
                    let id = player.id.clone();
                    let title = if player.is_skipped(category) {
                        t("ui.skipped")
                    } else {
                        String::new()
                    };
                    html! {
                        <td class={class} style={player_color(idx).cell_style()} title={title}
                            onclick={Callback::from(move |_| on_cell.emit((id.clone(), category)))}>
                            { text }
                        </td>
                    }
                }) }
            </tr>
        }
    };

    let add_player = {
        let cb = p.on_add_player.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="scoreboard" id="main" role="main">
            <table class="score-table">
                <thead>
                    <tr>
                        <th scope="col">{ t("ui.category") }</th>
                        { for p.state.players.iter().enumerate().map(|(idx, player)| {
                            let on_player = p.on_player.clone();
                            let id = player.id.clone();
                            html! {
                                <th scope="col" class="player-header" style={player_color(idx).header_style()}
                                    onclick={Callback::from(move |_| on_player.emit(id.clone()))}>
                                    { player.name.clone() }
                                </th>
                            }
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for Category::TOP.into_iter().map(&category_row) }
                    { derived_row(t("ui.sum"), "sum-row", &sheet, |s| s.top.to_string()) }
                    { derived_row(t(&Category::Bonus.i18n_key()), "bonus-row", &sheet, |s| {
                        s.bonus.map(|b| b.to_string()).unwrap_or_default()
                    }) }
                    { for Category::BOTTOM.into_iter().map(&category_row) }
                    { derived_row(t("ui.total"), "total-row", &sheet, |s| s.total.to_string()) }
                </tbody>
            </table>
            <button type="button" class="btn add-player-btn" onclick={add_player}>{ t("action.add_player") }</button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatzy_game::ScoreInput;

    #[test]
    fn cell_text_distinguishes_states() {
        let mut player = Player::new(PlayerId::from("p"), "Ada");
        assert_eq!(cell_text(&player, Category::Ones).0, "");
        player.apply(Category::Ones, ScoreInput::Skip);
        assert_eq!(
            cell_text(&player, Category::Ones),
            ("\u{2013}".to_string(), "score-cell skipped")
        );
        player.apply(Category::Ones, ScoreInput::Value(3));
        assert_eq!(cell_text(&player, Category::Ones).0, "3");
    }
}
