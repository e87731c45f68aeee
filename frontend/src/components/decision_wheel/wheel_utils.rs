use shared::i18n::{lookup, Language};
use shared::shared_wheel_game::Outcome;
use yew::prelude::*;

use crate::styles;

fn outcome_classes(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Yes => "from-green-400 to-green-600 border-green-300",
        Outcome::No => "from-red-400 to-red-600 border-red-300",
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub outcome: Option<Outcome>,
    pub language: Language,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(outcome) = props.outcome else {
        return html! {};
    };

    html! {
        <div class="flex flex-col items-center justify-center" aria-live="polite">
            <span class={styles::TEXT_SMALL}>{lookup("yourAnswer", props.language)}</span>
            <div class={classes!(
                "mt-2",
                "px-8",
                "py-4",
                "rounded-xl",
                "bg-gradient-to-r",
                "text-white",
                "font-bold",
                "text-3xl",
                "shadow-lg",
                "border-2",
                "animate-bounce",
                outcome_classes(outcome)
            )}>
                {lookup(outcome.translation_key(), props.language)}
            </div>
            <span class={classes!(styles::TEXT_SMALL, "mt-3")}>{lookup("decisionMade", props.language)}</span>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub spinning: bool,
    pub language: Language,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let label = if props.spinning { "spinning" } else { "spinButton" };

    html! {
        <button
            class={styles::SPIN_BUTTON}
            onclick={props.onclick.clone()}
            disabled={props.spinning}
        >
            <svg class="w-6 h-6 mr-2" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10" />
                <path d="M12 6v6l4 2" />
            </svg>
            {lookup(label, props.language)}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    /// Most recent first.
    pub history: Vec<Outcome>,
    pub language: Language,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    if props.history.is_empty() {
        return html! {};
    }

    html! {
        <div class="flex flex-col items-center gap-2">
            <h2 class={styles::TEXT_SMALL}>{lookup("recentResults", props.language)}</h2>
            <ol class="flex gap-2">
                { for props.history.iter().map(|outcome| {
                    let color = match outcome {
                        Outcome::Yes => "bg-[#66BB6A]",
                        Outcome::No => "bg-[#EF5350]",
                    };
                    html! {
                        <li class={classes!(styles::HISTORY_CHIP, color)}>
                            {lookup(outcome.translation_key(), props.language)}
                        </li>
                    }
                }) }
            </ol>
        </div>
    }
}
