//! Value entry dialog for one cell of the score sheet.
use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yatzy_game::constants::DICE_PER_ROLL;
use yatzy_game::{Category, EntryMode, ScoreInput, entry_mode, possible_values, validate};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub player_name: AttrValue,
    pub category: Category,
    /// Existing entry: `None` unplayed, `Some(None)` skipped
    pub current: Option<Option<u32>>,
    pub on_submit: Callback<ScoreInput>,
    pub on_close: Callback<()>,
}

/// One pick offered by the dialog: button label and the value it enters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: u32,
}

/// Picks offered for a category; empty for free numeric entry.
#[must_use]
pub fn choices(category: Category) -> Vec<Choice> {
    match entry_mode(category) {
        EntryMode::Multiplier { face } => (1..=DICE_PER_ROLL)
            .map(|n| Choice {
                label: format!("{n} \u{d7} {face} = {}", n * face),
                value: n * face,
            })
            .collect(),
        EntryMode::DicePicker { group } => (1..=6)
            .map(|die| Choice {
                label: format!("{die} \u{d7} {group} = {}", die * group),
                value: die * group,
            })
            .collect(),
        EntryMode::ValueList => possible_values(category)
            .as_slice()
            .unwrap_or_default()
            .iter()
            .map(|v| Choice {
                label: v.to_string(),
                value: *v,
            })
            .collect(),
        EntryMode::Fixed(value) => vec![Choice {
            label: value.to_string(),
            value,
        }],
        EntryMode::NumberPad => Vec::new(),
    }
}

fn help_text(category: Category) -> String {
    match entry_mode(category) {
        EntryMode::Multiplier { face } => {
            let face = face.to_string();
            let mut args = BTreeMap::new();
            args.insert("face", face.as_str());
            tr("help.multiplier", Some(&args))
        }
        EntryMode::DicePicker { group: 2 } => t("help.one_pair"),
        EntryMode::DicePicker { group: 3 } => t("help.three_of_a_kind"),
        EntryMode::DicePicker { .. } => t("help.four_of_a_kind"),
        EntryMode::ValueList => t("help.value_list"),
        EntryMode::Fixed(value) => {
            let value = value.to_string();
            let mut args = BTreeMap::new();
            args.insert("value", value.as_str());
            tr("help.fixed", Some(&args))
        }
        EntryMode::NumberPad => t("help.number_pad"),
    }
}

/// Parse and gate a typed value; the error is a translated message.
fn parse_entry(category: Category, raw: &str) -> Result<u32, String> {
    let illegal = || {
        let category_label = t(&category.i18n_key());
        let mut args = BTreeMap::new();
        args.insert("value", raw.trim());
        args.insert("category", category_label.as_str());
        tr("help.illegal_value", Some(&args))
    };
    let value: u32 = raw.trim().parse().map_err(|_| illegal())?;
    validate(category, value).map_err(|_| illegal())?;
    Ok(value)
}

#[function_component(ScoreEntry)]
pub fn score_entry(p: &Props) -> Html {
    let typed = use_state(String::new);
    let error = use_state(|| None::<String>);

    let submit = |input: ScoreInput| {
        let cb = p.on_submit.clone();
        let typed = typed.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            typed.set(String::new());
            error.set(None);
            cb.emit(input);
        })
    };

    let picker = if matches!(entry_mode(p.category), EntryMode::NumberPad) {
        let on_input = {
            let typed = typed.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    typed.set(input.value());
                }
            })
        };
        let on_confirm = {
            let cb = p.on_submit.clone();
            let typed = typed.clone();
            let error = error.clone();
            let category = p.category;
            Callback::from(move |_: MouseEvent| match parse_entry(category, &typed) {
                Ok(value) => {
                    typed.set(String::new());
                    error.set(None);
                    cb.emit(ScoreInput::Value(value));
                }
                Err(message) => error.set(Some(message)),
            })
        };
        html! {
            <div class="number-pad">
                <input type="number" min="0" inputmode="numeric" value={(*typed).clone()} oninput={on_input} />
                <button type="button" class="btn btn-primary" onclick={on_confirm}>{ t("action.confirm") }</button>
                { (*error).clone().map(|msg| html! { <p class="entry-error" role="alert">{ msg }</p> }).unwrap_or_default() }
            </div>
        }
    } else {
        html! {
            <div class="value-picker">
                { for choices(p.category).into_iter().map(|choice| {
                    let selected = p.current == Some(Some(choice.value));
                    html! {
                        <button type="button" class={classes!("btn", "value-btn", selected.then_some("selected"))}
                            onclick={submit(ScoreInput::Value(choice.value))}>
                            { choice.label }
                        </button>
                    }
                }) }
            </div>
        }
    };

    let skipped = matches!(p.current, Some(None));
    let skip_button = if skipped {
        html! { <button type="button" class="btn btn-secondary unskip-btn" onclick={submit(ScoreInput::Clear)}>{ t("action.unskip") }</button> }
    } else {
        html! { <button type="button" class="btn btn-secondary skip-btn" onclick={submit(ScoreInput::Skip)}>{ t("action.skip") }</button> }
    };
    let clear_button = if matches!(p.current, Some(Some(_))) {
        html! { <button type="button" class="btn btn-secondary clear-btn" onclick={submit(ScoreInput::Clear)}>{ t("action.clear_value") }</button> }
    } else {
        Html::default()
    };
    let cancel = {
        let cb = p.on_close.clone();
        let typed = typed.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            typed.set(String::new());
            error.set(None);
            cb.emit(());
        })
    };

    let title = format!("{} \u{b7} {}", p.player_name, t(&p.category.i18n_key()));
    html! {
        <Modal open={p.open} title={title} description={Some(AttrValue::from(help_text(p.category)))} on_close={p.on_close.clone()}>
            { picker }
            <div class="dialog-actions">
                { skip_button }
                { clear_button }
                <button type="button" class="btn" onclick={cancel}>{ t("action.cancel") }</button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_lang;
    use yatzy_game::{Language, PossibleValues};

    #[test]
    fn every_choice_passes_validation() {
        for category in Category::ALL {
            for choice in choices(category) {
                assert!(
                    possible_values(category).allows(choice.value),
                    "{category} offers illegal {}",
                    choice.value
                );
            }
        }
    }

    #[test]
    fn pickers_cover_the_whitelists() {
        let fours = choices(Category::Fours);
        assert_eq!(fours.len(), DICE_PER_ROLL as usize);
        assert_eq!(fours.last().map(|c| c.value), Some(DICE_PER_ROLL * 4));
        assert_eq!(choices(Category::OnePair).last().map(|c| c.value), Some(12));
        assert_eq!(choices(Category::FullHouse).len(), 20);
        assert_eq!(choices(Category::Yatzy), vec![Choice { label: "50".into(), value: 50 }]);
        assert!(choices(Category::Chance).is_empty());
        assert_eq!(possible_values(Category::Chance), PossibleValues::Unrestricted);
    }

    #[test]
    fn typed_values_are_gated() {
        set_lang(Language::En);
        assert_eq!(parse_entry(Category::Chance, " 23 "), Ok(23));
        assert_eq!(parse_entry(Category::Yatzy, "50"), Ok(50));
        assert_eq!(
            parse_entry(Category::Yatzy, "40"),
            Err("40 is not a valid score for Yatzy".to_string())
        );
        assert!(parse_entry(Category::Chance, "abc").is_err());
    }
}
