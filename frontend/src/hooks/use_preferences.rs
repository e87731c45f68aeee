use std::rc::Rc;

use gloo::events::EventListener;
use shared::constants::{LANGUAGE_STORAGE_KEY, THEME_STORAGE_KEY};
use shared::preferences::{Preferences, PreferencesAction};
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryListEvent};
use yew::prelude::*;

use crate::config::{prefers_dark, read_storage, write_storage};

/// `Preferences` as a yew reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferencesState(pub Preferences);

impl Reducible for PreferencesState {
    type Action = PreferencesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(PreferencesState(next))
        }
    }
}

pub type PreferencesContext = UseReducerHandle<PreferencesState>;

fn apply_theme(dark_mode: bool) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("No document element, theme not applied");
        return;
    };
    // Only the theme classes are touched; anything else on <html> stays
    let classes = html.class_list();
    for (class, on) in theme_classes(dark_mode) {
        if classes.toggle_with_force(class, on).is_err() {
            log::warn!("Could not toggle {} class on <html>", class);
        }
    }
}

fn theme_classes(dark_mode: bool) -> [(&'static str, bool); 2] {
    [("dark", dark_mode), ("light", !dark_mode)]
}

fn apply_html_lang(lang: &str) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("lang", lang);
    }
}

#[derive(Properties, PartialEq)]
pub struct PreferencesProviderProps {
    pub children: Html,
}

#[function_component(PreferencesProvider)]
pub fn preferences_provider(props: &PreferencesProviderProps) -> Html {
    let preferences = use_reducer(|| {
        PreferencesState(Preferences::from_stored(
            read_storage(LANGUAGE_STORAGE_KEY).as_deref(),
            read_storage(THEME_STORAGE_KEY).as_deref(),
            prefers_dark(),
        ))
    });

    {
        let current = preferences.0;
        use_effect_with(current, move |prefs| {
            apply_theme(prefs.is_dark());
            apply_html_lang(prefs.language.html_lang());
            write_storage(LANGUAGE_STORAGE_KEY, prefs.language.code());
            write_storage(THEME_STORAGE_KEY, prefs.theme.as_str());
            || ()
        });
    }

    // Follow the OS setting while the theme is `System`
    {
        let preferences = preferences.clone();
        use_effect_with((), move |_| {
            let listener = window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map(|query| {
                    EventListener::new(&query, "change", move |event| {
                        if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                            preferences.dispatch(PreferencesAction::SystemDarkChanged(event.matches()));
                        }
                    })
                });
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<PreferencesContext> context={preferences}>
            { props.children.clone() }
        </ContextProvider<PreferencesContext>>
    }
}

#[hook]
pub fn use_preferences() -> PreferencesContext {
    use_context::<PreferencesContext>().expect("use_preferences called outside PreferencesProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_classes_flip_together() {
        assert_eq!(theme_classes(true), [("dark", true), ("light", false)]);
        assert_eq!(theme_classes(false), [("dark", false), ("light", true)]);
    }

    #[test]
    fn test_reducer_keeps_state_on_noop() {
        let state = Rc::new(PreferencesState::default());
        let same = Rc::clone(&state).reduce(PreferencesAction::SystemDarkChanged(false));
        assert!(Rc::ptr_eq(&state, &same));

        let toggled = Rc::clone(&state).reduce(PreferencesAction::ToggleTheme);
        assert!(toggled.0.is_dark());
    }
}
