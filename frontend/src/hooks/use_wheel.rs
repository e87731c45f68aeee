use std::rc::Rc;
use std::time::Duration;

use gloo::events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::shared_wheel_game::{RngSource, SpinState, WheelEngine};
use shared::spin_timer::{CompletionTimer, WheelController};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};
use yew::prelude::*;

/// Schedules spin completions on the browser event loop.
pub struct BrowserTimer;

impl CompletionTimer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

type BrowserWheel = WheelController<RngSource<SmallRng>, BrowserTimer>;

#[derive(Clone, PartialEq)]
pub struct WheelHandle {
    pub state: SpinState,
    pub spin_duration: Duration,
    pub spin: Callback<()>,
}

fn is_form_target(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map_or(false, |element| {
            matches!(
                element.tag_name().to_ascii_lowercase().as_str(),
                "input" | "textarea" | "select" | "button" | "a"
            )
        })
}

/// One wheel per mounted component; a pending completion dies with the component.
#[hook]
pub fn use_wheel() -> WheelHandle {
    let state = use_state(SpinState::default);

    let controller: Rc<BrowserWheel> = {
        let state = state.clone();
        use_memo((), move |_| {
            let engine = WheelEngine::new(RngSource::new(SmallRng::from_entropy()));
            WheelController::new(engine, BrowserTimer, move |snapshot| state.set(snapshot))
        })
    };

    {
        let controller = controller.clone();
        use_effect_with((), move |_| move || controller.teardown());
    }

    let spin = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            if !controller.spin() {
                log::debug!("Spin ignored, wheel already spinning");
            }
        })
    };

    {
        let spin = spin.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                // Non-passive so Space can be kept from scrolling the page
                let options = EventListenerOptions::enable_prevent_default();
                EventListener::new_with_options(&window, "keydown", options, move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.repeat() || is_form_target(event) {
                        return;
                    }
                    if matches!(event.key().as_str(), " " | "Enter") {
                        event.prevent_default();
                        spin.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let spin_duration = controller.config().spin_duration;

    WheelHandle {
        state: (*state).clone(),
        spin_duration,
        spin,
    }
}
