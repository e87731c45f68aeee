pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod privacy;

use shared::i18n::Language;
use shared::preferences::PreferencesAction;
use shared::seo::PageKind;
use yew::prelude::*;

use crate::base::Base;
use crate::hooks::use_preferences::use_preferences;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    /// Language from the URL; `None` on `/`, where the stored preference applies.
    pub language: Option<Language>,
    pub page: PageKind,
}

/// Renders one routed page and keeps the stored language in step with the URL.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let preferences = use_preferences();
    let language = props.language.unwrap_or(preferences.0.language);

    {
        let preferences = preferences.clone();
        use_effect_with(props.language, move |from_url| {
            if let Some(language) = *from_url {
                preferences.dispatch(PreferencesAction::SetLanguage(language));
            }
            || ()
        });
    }

    let body = match props.page {
        PageKind::Home => html! { <home::Home {language} /> },
        PageKind::About => html! { <about::About {language} /> },
        PageKind::Contact => html! { <contact::Contact {language} /> },
        PageKind::Privacy => html! { <privacy::Privacy {language} /> },
    };

    html! {
        <Base {language} page={props.page}>
            {body}
        </Base>
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProps {
    pub language: Language,
}
