use crate::i18n::{languages, t};
use crate::router::Route;
use wasm_bindgen::JsCast;
use yatzy_game::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: Language,
    pub on_lang_change: Callback<Language>,
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                && let Some(lang) = Language::from_code(&sel.value())
            {
                cb.emit(lang);
            }
        })
    };
    let nav_button = |route: Route, label: &str| {
        let cb = p.on_navigate.clone();
        let target = route.clone();
        let class = if p.active == route { "nav-link active" } else { "nav-link" };
        html! {
            <button type="button" class={class} onclick={Callback::from(move |_| cb.emit(target.clone()))}>
                { label.to_string() }
            </button>
        }
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <h1 class="header-title">{ t("title.score_dashboard") }</h1>
                <nav class="header-nav">
                    { nav_button(Route::Home, &t("ui.scoreboard")) }
                    { nav_button(Route::History, &t("ui.history")) }
                </nav>
                <div class="header-right">
                    <label for="lang-select" class="sr-only">{ t("ui.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("ui.language")}>
                        { for languages().iter().map(|lang| html! {
                            <option value={lang.code()} selected={*lang == p.current_lang}>
                                { lang.native_name() }
                            </option>
                        }) }
                    </select>
                </div>
            </div>
        </header>
    }
}
