use shared::i18n::{lookup, Language};
use shared::preferences::PreferencesAction;
use shared::seo::PageKind;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_preferences::use_preferences;
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub current: Language,
    pub page: PageKind,
}

/// Moves to the same page in the chosen language.
#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    let preferences = use_preferences();
    let navigator = use_navigator();
    let page = props.page;

    let onchange = Callback::from(move |e: Event| {
        let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
            return;
        };
        let Some(language) = Language::from_code(&select.value()) else {
            log::warn!("Unknown language selected: {}", select.value());
            return;
        };
        preferences.dispatch(PreferencesAction::SetLanguage(language));
        if let Some(navigator) = &navigator {
            navigator.push(&Route::for_page(language, page));
        }
    });

    html! {
        <label class="flex items-center gap-2">
            <span class="sr-only">{lookup("languageLabel", props.current)}</span>
            <select class={styles::SELECT} {onchange}>
                { for Language::ALL.iter().map(|language| html! {
                    <option value={language.code()} selected={*language == props.current}>
                        {format!("{} {}", language.flag(), language.native_name())}
                    </option>
                }) }
            </select>
        </label>
    }
}
