use shared::i18n::lookup;
use yew::prelude::*;

use crate::pages::LanguageProps;
use crate::styles;

const SECTIONS: [(&str, &str); 5] = [
    ("privacySection1Title", "privacySection1Content"),
    ("privacySection2Title", "privacySection2Content"),
    ("privacySection3Title", "privacySection3Content"),
    ("privacySection4Title", "privacySection4Content"),
    ("privacySection5Title", "privacySection5Content"),
];

#[function_component(Privacy)]
pub fn privacy(props: &LanguageProps) -> Html {
    let language = props.language;

    html! {
        <div class={styles::CONTAINER_TEXT}>
            <h1 class={styles::TEXT_H1}>{lookup("privacyTitle", language)}</h1>
            <p class={styles::TEXT_SMALL}>{lookup("privacyLastUpdated", language)}</p>
            <p class={styles::TEXT_BODY}>{lookup("privacyIntro", language)}</p>
            { for SECTIONS.iter().map(|(title, content)| html! {
                <section class="space-y-2">
                    <h2 class={styles::TEXT_H3}>{lookup(title, language)}</h2>
                    <p class={styles::TEXT_BODY}>{lookup(content, language)}</p>
                </section>
            }) }
            <p class={styles::TEXT_BODY}>{lookup("privacyContact", language)}</p>
        </div>
    }
}
