use shared::i18n::lookup;
use shared::seo::PageKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_preferences::use_preferences;
use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let language = use_preferences().0.language;

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 dark:bg-gray-900 px-4 text-center">
            <h1 class={styles::TEXT_H1}>{lookup("notFoundTitle", language)}</h1>
            <p class={styles::TEXT_BODY}>{lookup("notFoundText", language)}</p>
            <Link<Route> to={Route::for_page(language, PageKind::Home)} classes={styles::LINK}>
                {lookup("visitHome", language)}
            </Link<Route>>
        </div>
    }
}
