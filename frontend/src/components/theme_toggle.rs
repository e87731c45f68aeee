use shared::i18n::lookup;
use shared::preferences::PreferencesAction;
use yew::prelude::*;

use crate::hooks::use_preferences::use_preferences;
use crate::styles;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let preferences = use_preferences();
    let prefs = preferences.0;

    let onclick = {
        let preferences = preferences.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            preferences.dispatch(PreferencesAction::ToggleTheme);
        })
    };

    let theme_icon = if prefs.is_dark() { "☀️" } else { "🌙" };
    let title = format!(
        "{} ({})",
        lookup("themeToggle", prefs.language),
        lookup(prefs.theme.label_key(), prefs.language)
    );

    html! {
        <button {onclick} class={styles::BUTTON_ICON} title={title.clone()} aria-label={title}>
            {theme_icon}
        </button>
    }
}
