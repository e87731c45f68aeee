use shared::constants::CONTACT_EMAIL;
use shared::i18n::lookup;
use yew::prelude::*;

use crate::pages::LanguageProps;
use crate::styles;

#[function_component(Contact)]
pub fn contact(props: &LanguageProps) -> Html {
    let language = props.language;

    html! {
        <div class={styles::CONTAINER_TEXT}>
            <h1 class={styles::TEXT_H1}>{lookup("contactTitle", language)}</h1>
            <p class={styles::TEXT_BODY}>{lookup("getInTouchText", language)}</p>
            <div class={styles::CARD}>
                <p class={styles::TEXT_BODY}>{lookup("contactDescription", language)}</p>
                <p class="mt-4">
                    <span class={styles::TEXT_SMALL}>{lookup("contactEmail", language)}{" "}</span>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)} class={styles::LINK}>{CONTACT_EMAIL}</a>
                </p>
                <p class={classes!(styles::TEXT_SMALL, "mt-4")}>{lookup("contactResponse", language)}</p>
            </div>
        </div>
    }
}
