use crate::i18n::t;
use std::rc::Rc;
use yatzy_game::{BonusRule, GameState, current_ranking};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub rule: BonusRule,
}

/// Standings of the game in progress.
#[function_component(Ranking)]
pub fn ranking(p: &Props) -> Html {
    let ranked = current_ranking(&p.state.players, &p.rule);
    html! {
        <section class="ranking" aria-labelledby="ranking-title">
            <h2 id="ranking-title">{ t("title.ranking") }</h2>
            <ol class="ranking-list">
                { for ranked.into_iter().map(|entry| html! {
                    <li class="ranking-entry" data-rank={entry.rank.to_string()}>
                        <span class="rank">{ format!("{}.", entry.rank) }</span>
                        <span class="name">{ entry.name }</span>
                        <span class="total">{ entry.total.to_string() }</span>
                    </li>
                }) }
            </ol>
        </section>
    }
}
