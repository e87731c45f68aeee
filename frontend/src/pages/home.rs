use shared::i18n::lookup;
use yew::prelude::*;

use crate::components::{DecisionWheel, Faq};
use crate::pages::LanguageProps;
use crate::styles;

#[function_component(Home)]
pub fn home(props: &LanguageProps) -> Html {
    let language = props.language;

    html! {
        <>
            <div class={styles::HERO_CONTENT}>
                <h1 class={styles::HERO_TITLE}>{lookup("heroTitle", language)}</h1>
                <p class={styles::HERO_TEXT}>{lookup("cantDecide", language)}</p>
                <p class={classes!(styles::TEXT_BODY, "mt-4")}>{lookup("heroDescription", language)}</p>
            </div>
            <DecisionWheel {language} />
            <Faq {language} />
        </>
    }
}
