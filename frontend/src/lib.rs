pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use shared::i18n::Language;
use shared::seo::PageKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_preferences::PreferencesProvider;
use crate::pages::{not_found::NotFound, Page};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    /// A language home (`/ja`) or an unprefixed English page (`/about`).
    #[at("/:segment")]
    Segment { segment: String },
    #[at("/:lang/:page")]
    LocalizedPage { lang: String, page: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route that renders `page` in `language`.
    pub fn for_page(language: Language, page: PageKind) -> Route {
        match page {
            PageKind::Home => Route::Segment { segment: language.code().to_string() },
            _ => Route::LocalizedPage {
                lang: language.code().to_string(),
                page: page.slug().to_string(),
            },
        }
    }

    /// `None` language means "use the stored preference".
    pub fn resolve(&self) -> Option<(Option<Language>, PageKind)> {
        match self {
            Route::Root => Some((None, PageKind::Home)),
            Route::Segment { segment } => match Language::from_code(segment) {
                Some(language) => Some((Some(language), PageKind::Home)),
                None => match PageKind::from_slug(segment) {
                    Some(PageKind::Home) | None => None,
                    Some(page) => Some((Some(Language::En), page)),
                },
            },
            Route::LocalizedPage { lang, page } => {
                let language = Language::from_code(lang)?;
                match PageKind::from_slug(page)? {
                    PageKind::Home => None,
                    page => Some((Some(language), page)),
                }
            }
            Route::NotFound => None,
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <PreferencesProvider>
                <div class="min-h-screen w-full">
                    <Switch<Route> render={switch} />
                </div>
            </PreferencesProvider>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route.resolve() {
        Some((language, page)) => html! { <Page {language} {page} /> },
        None => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(value: &str) -> Route {
        Route::Segment { segment: value.to_string() }
    }

    #[test]
    fn test_root_uses_stored_language() {
        assert_eq!(Route::Root.resolve(), Some((None, PageKind::Home)));
    }

    #[test]
    fn test_segment_is_language_or_english_page() {
        assert_eq!(segment("ja").resolve(), Some((Some(Language::Ja), PageKind::Home)));
        assert_eq!(segment("privacy").resolve(), Some((Some(Language::En), PageKind::Privacy)));
        assert_eq!(segment("home").resolve(), None);
        assert_eq!(segment("fr").resolve(), None);
    }

    #[test]
    fn test_localized_pages() {
        let route = Route::LocalizedPage { lang: "es".into(), page: "contact".into() };
        assert_eq!(route.resolve(), Some((Some(Language::Es), PageKind::Contact)));

        let unknown = Route::LocalizedPage { lang: "xx".into(), page: "about".into() };
        assert_eq!(unknown.resolve(), None);
    }

    #[test]
    fn test_for_page_round_trips_through_resolve() {
        for language in Language::ALL {
            for page in PageKind::ALL {
                let route = Route::for_page(language, page);
                assert_eq!(route.resolve(), Some((Some(language), page)));
            }
        }
    }
}
