use shared::constants::SITE_NAME;
use shared::i18n::{lookup, Language};
use shared::seo::PageKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{LanguageSwitcher, PageHead, ThemeToggle};
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub language: Language,
    pub page: PageKind,
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let language = props.language;
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <PageHead {language} page={props.page} />
            <nav class={styles::NAV}>
                <div class={styles::NAV_CONTENT}>
                    <Link<Route> to={Route::for_page(language, PageKind::Home)} classes={styles::NAV_BRAND}>
                        {SITE_NAME}
                    </Link<Route>>
                    <div class={styles::NAV_ITEMS}>
                        <LanguageSwitcher current={language} page={props.page} />
                        <ThemeToggle />
                    </div>
                </div>
            </nav>
            <main class="pt-16 flex-1">{props.children.clone()}</main>
            <footer class={styles::FOOTER}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8 py-8 text-center">
                    <div class="flex flex-wrap justify-center gap-6 mb-4">
                        { for [PageKind::About, PageKind::Contact, PageKind::Privacy].into_iter().map(|page| html! {
                            <Link<Route> to={Route::for_page(language, page)} classes={styles::FOOTER_LINK}>
                                {lookup(page.label_key(), language)}
                            </Link<Route>>
                        }) }
                    </div>
                    <p class={styles::TEXT_SMALL}>
                        {format!("© {} {}. {}", year, SITE_NAME, lookup("footerText", language))}
                    </p>
                </div>
            </footer>
        </div>
    }
}
