mod wheel_face;
mod wheel_utils;

use shared::i18n::{lookup, Language};
use yew::prelude::*;

use crate::hooks::use_wheel::use_wheel;
use wheel_face::WheelFace;
use wheel_utils::{HistoryList, ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct DecisionWheelProps {
    pub language: Language,
}

#[function_component(DecisionWheel)]
pub fn decision_wheel(props: &DecisionWheelProps) -> Html {
    let wheel = use_wheel();
    let language = props.language;
    let spinning = wheel.state.is_spinning();

    let onclick = {
        let spin = wheel.spin.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            spin.emit(());
        })
    };

    html! {
        <section class="flex flex-col items-center gap-8 mb-16">
            <WheelFace
                rotation={wheel.state.current_rotation_degrees}
                duration_ms={wheel.spin_duration.as_millis() as u64}
                yes_label={lookup("yes", language)}
                no_label={lookup("no", language)}
            />

            <SpinButton {spinning} {language} {onclick} />

            <ResultDisplay
                outcome={if spinning { None } else { wheel.state.last_outcome }}
                {language}
            />

            <HistoryList history={wheel.state.history.iter().copied().collect::<Vec<_>>()} {language} />

            <div class="text-center max-w-md space-y-1 text-gray-600 dark:text-gray-400">
                <p class="text-sm">{lookup("instruction1", language)}</p>
                <p class="text-sm">{lookup("instruction2", language)}</p>
                <p class="text-sm">{lookup("instruction3", language)}</p>
                <p class="text-xs pt-2">{lookup("keyboardHint", language)}</p>
            </div>
        </section>
    }
}
