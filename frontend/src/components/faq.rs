use shared::i18n::{lookup, Language};
use shared::schema::faq_entries;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub language: Language,
}

/// Same questions as the FAQ structured data, one open at a time.
#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);
    let entries = faq_entries(props.language);

    html! {
        <section class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 pb-16">
            <h2 class={classes!(styles::TEXT_H2, "text-center", "mb-8")}>{lookup("faqTitle", props.language)}</h2>
            <div class="space-y-3">
                { for entries.into_iter().enumerate().map(|(index, item)| {
                    let expanded = *open == Some(index);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| {
                            open.set(if expanded { None } else { Some(index) });
                        })
                    };
                    html! {
                        <div class={styles::FAQ_ITEM}>
                            <button class={styles::FAQ_QUESTION} {onclick} aria-expanded={expanded.to_string()}>
                                <span>{item.question}</span>
                                <span class="ml-4 text-amber-500">{if expanded { "−" } else { "+" }}</span>
                            </button>
                            if expanded {
                                <p class={classes!(styles::TEXT_BODY, "mt-3")}>{item.answer}</p>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
