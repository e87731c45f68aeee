use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::shared_wheel_game::{SpinRandom, SpinState, WheelConfig, WheelEngine};

/// One-shot deferred task registration.
///
/// Dropping the returned handle cancels the task if it has not fired yet. In the
/// browser this is `gloo_timers::callback::Timeout`.
pub trait CompletionTimer {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Drives a [`WheelEngine`] on an event loop: a spin schedules exactly one
/// completion, and tearing the controller down releases it.
pub struct WheelController<R, T: CompletionTimer> {
    engine: Rc<RefCell<WheelEngine<R>>>,
    timer: T,
    pending: RefCell<Option<T::Handle>>,
    on_change: Rc<dyn Fn(SpinState)>,
}

impl<R, T> WheelController<R, T>
where
    R: SpinRandom + 'static,
    T: CompletionTimer,
{
    pub fn new(engine: WheelEngine<R>, timer: T, on_change: impl Fn(SpinState) + 'static) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
            timer,
            pending: RefCell::new(None),
            on_change: Rc::new(on_change),
        }
    }

    pub fn state(&self) -> SpinState {
        self.engine.borrow().state().clone()
    }

    pub fn config(&self) -> WheelConfig {
        self.engine.borrow().config().clone()
    }

    /// Returns `true` when a new spin started, `false` when one was already in flight.
    pub fn spin(&self) -> bool {
        let plan = match self.engine.borrow_mut().spin() {
            Some(plan) => plan,
            None => return false,
        };

        // Observers see Spinning before the completion is even scheduled
        (self.on_change)(self.state());

        let engine: Weak<RefCell<WheelEngine<R>>> = Rc::downgrade(&self.engine);
        let on_change = Rc::clone(&self.on_change);
        let handle = self.timer.schedule(
            plan.duration,
            Box::new(move || {
                let Some(engine) = engine.upgrade() else {
                    return;
                };
                let landed = {
                    let mut engine = engine.borrow_mut();
                    engine.complete_spin().map(|_| engine.state().clone())
                };
                if let Some(state) = landed {
                    on_change(state);
                }
            }),
        );

        // The previous handle (if any) belongs to a completion that already fired
        self.pending.replace(Some(handle));
        true
    }

    /// Cancels a pending completion. Called when the hosting page goes away.
    pub fn teardown(&self) {
        if self.pending.borrow_mut().take().is_some() {
            log::debug!("Wheel controller torn down, pending completion released");
        }
    }
}

impl<R, T: CompletionTimer> Drop for WheelController<R, T> {
    fn drop(&mut self) {
        self.pending.get_mut().take();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::*;
    use std::cell::Cell;

    struct Task {
        due: Duration,
        run: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Virtual clock for tests: tasks only run when `advance` passes their deadline.
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        now: Rc<Cell<Duration>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualTimer {
        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
            let now = self.now.get();
            let due: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter(|task| task.due <= now && !task.cancelled.get())
                .filter_map(|task| task.run.take())
                .collect();
            self.tasks.borrow_mut().retain(|task| task.run.is_some());
            for run in due {
                run();
            }
        }

        pub fn pending(&self) -> usize {
            self.tasks
                .borrow()
                .iter()
                .filter(|task| task.run.is_some() && !task.cancelled.get())
                .count()
        }
    }

    impl CompletionTimer for ManualTimer {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(Task {
                due: self.now.get() + delay,
                run: Some(task),
                cancelled: Rc::clone(&cancelled),
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualTimer;
    use super::*;
    use crate::shared_wheel_game::{decode_outcome, Outcome, Phase};
    use std::collections::VecDeque;

    const SPIN: Duration = Duration::from_millis(crate::constants::SPIN_DURATION_MS);

    fn controller(
        timer: &ManualTimer,
        unit: f64,
    ) -> (WheelController<impl FnMut() -> f64, ManualTimer>, Rc<RefCell<Vec<SpinState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let controller = WheelController::new(WheelEngine::new(move || unit), timer.clone(), move |state| {
            sink.borrow_mut().push(state)
        });
        (controller, seen)
    }

    #[test]
    fn test_spin_completes_after_duration() {
        let timer = ManualTimer::default();
        let (controller, seen) = controller(&timer, 0.25);

        assert!(controller.spin());
        assert_eq!(controller.state().phase, Phase::Spinning);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(timer.pending(), 1);

        timer.advance(SPIN - Duration::from_millis(1));
        assert_eq!(controller.state().phase, Phase::Spinning);

        timer.advance(Duration::from_millis(1));
        let state = controller.state();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.last_outcome, Some(Outcome::Yes));
        assert_eq!(state.history, VecDeque::from(vec![Outcome::Yes]));
        assert!(state.current_rotation_degrees > 0.0);
        assert_eq!(decode_outcome(state.current_rotation_degrees), Outcome::Yes);
        assert_eq!(seen.borrow().last(), Some(&state));
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_only_one_completion_in_flight() {
        let timer = ManualTimer::default();
        let (controller, seen) = controller(&timer, 0.75);

        assert!(controller.spin());
        let spinning = controller.state();
        assert!(!controller.spin());
        assert!(!controller.spin());

        assert_eq!(timer.pending(), 1);
        assert_eq!(controller.state(), spinning);
        assert_eq!(seen.borrow().len(), 1);

        timer.advance(SPIN);
        assert_eq!(controller.state().history.len(), 1);
        assert_eq!(controller.state().last_outcome, Some(Outcome::No));
    }

    #[test]
    fn test_teardown_cancels_pending_completion() {
        let timer = ManualTimer::default();
        let (controller, seen) = controller(&timer, 0.25);

        controller.spin();
        controller.teardown();
        timer.advance(SPIN * 2);

        assert_eq!(controller.state().phase, Phase::Spinning);
        assert_eq!(controller.state().last_outcome, None);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_dropping_controller_cancels_completion() {
        let timer = ManualTimer::default();
        let (controller, seen) = controller(&timer, 0.25);

        controller.spin();
        drop(controller);
        timer.advance(SPIN);

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_consecutive_spins_accumulate() {
        let timer = ManualTimer::default();
        let (controller, _) = controller(&timer, 0.25);

        let mut previous = 0.0;
        for _ in 0..6 {
            assert!(controller.spin());
            timer.advance(SPIN);
            let rotation = controller.state().current_rotation_degrees;
            assert!(rotation > previous);
            previous = rotation;
        }
        assert_eq!(controller.state().history.len(), crate::constants::HISTORY_LIMIT);
    }
}
