use shared::i18n::lookup;
use yew::prelude::*;

use crate::pages::LanguageProps;
use crate::styles;

const FEATURES: [(&str, &str); 3] = [
    ("feature1Title", "feature1Text"),
    ("feature2Title", "feature2Text"),
    ("feature3Title", "feature3Text"),
];

#[function_component(About)]
pub fn about(props: &LanguageProps) -> Html {
    let language = props.language;

    html! {
        <div class={styles::CONTAINER_TEXT}>
            <h1 class={styles::TEXT_H1}>{lookup("aboutTitle", language)}</h1>
            <p class={styles::TEXT_BODY}>{lookup("aboutDescription1", language)}</p>

            <section class="space-y-3">
                <h2 class={styles::TEXT_H2}>{lookup("ourStory", language)}</h2>
                <p class={styles::TEXT_BODY}>{lookup("ourStoryText", language)}</p>
                <p class={styles::TEXT_BODY}>{lookup("aboutDescription2", language)}</p>
                <p class={styles::TEXT_BODY}>{lookup("aboutDescription3", language)}</p>
            </section>

            <section class="space-y-4">
                <h2 class={styles::TEXT_H2}>{lookup("whyChooseUs", language)}</h2>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <div class={styles::CARD}>
                            <h3 class={styles::TEXT_H3}>{lookup(title, language)}</h3>
                            <p class={classes!(styles::TEXT_BODY, "mt-2")}>{lookup(text, language)}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
