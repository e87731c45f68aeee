use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    HISTORY_LIMIT, JITTER_DEGREES, MAX_EXTRA_TURNS, MIN_EXTRA_TURNS, NO_POINTER_CENTER,
    SPIN_DURATION_MS, YES_POINTER_CENTER,
};

const FULL_TURN: f64 = 360.0;
const HALF_TURN: f64 = 180.0;

/// The answer the wheel lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    /// Translation key used for the label on the wheel face and in the result banner.
    pub fn translation_key(self) -> &'static str {
        match self {
            Outcome::Yes => "yes",
            Outcome::No => "no",
        }
    }

    /// Pointer angle at the middle of this outcome's half of the face.
    pub fn pointer_center(self) -> f64 {
        match self {
            Outcome::Yes => YES_POINTER_CENTER,
            Outcome::No => NO_POINTER_CENTER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Spinning,
}

/// Everything the page needs to render the wheel.
///
/// Created fresh when the page mounts and dropped with it; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpinState {
    pub phase: Phase,
    /// Cumulative rotation of the wheel face. Only ever grows.
    pub current_rotation_degrees: f64,
    pub last_outcome: Option<Outcome>,
    /// Most recent first.
    pub history: VecDeque<Outcome>,
}

impl SpinState {
    pub fn is_spinning(&self) -> bool {
        self.phase == Phase::Spinning
    }

    pub fn pointer_angle(&self) -> f64 {
        pointer_angle(self.current_rotation_degrees)
    }
}

/// Angle of the wheel face sitting under the fixed pointer at the top.
///
/// The face turns clockwise while the pointer stays put, so the face angle under
/// the pointer is the complement of the rotation.
pub fn pointer_angle(rotation_degrees: f64) -> f64 {
    (FULL_TURN - rotation_degrees.rem_euclid(FULL_TURN)).rem_euclid(FULL_TURN)
}

/// `[0, 180)` under the pointer is YES, `[180, 360)` is NO.
pub fn decode_outcome(rotation_degrees: f64) -> Outcome {
    let angle = pointer_angle(rotation_degrees);
    if (0.0..HALF_TURN).contains(&angle) {
        Outcome::Yes
    } else {
        Outcome::No
    }
}

/// Source of uniform values in `[0, 1)`.
///
/// Closures implement it directly, which is how tests force particular draws.
pub trait SpinRandom {
    fn unit(&mut self) -> f64;
}

impl<F> SpinRandom for F
where
    F: FnMut() -> f64,
{
    fn unit(&mut self) -> f64 {
        self()
    }
}

/// Adapts any `rand` generator into a [`SpinRandom`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> SpinRandom for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelConfigError {
    TooFewTurns(u32),
    TurnRangeInverted { min: u32, max: u32 },
    EmptyHistory,
    ZeroDuration,
    JitterOutOfRange(f64),
}

impl fmt::Display for WheelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewTurns(turns) => write!(f, "At least 2 extra turns are required, got {}", turns),
            Self::TurnRangeInverted { min, max } => {
                write!(f, "Extra turn range is inverted: min {} > max {}", min, max)
            }
            Self::EmptyHistory => write!(f, "History limit must be at least 1"),
            Self::ZeroDuration => write!(f, "Spin duration must be non-zero"),
            Self::JitterOutOfRange(jitter) => {
                write!(f, "Jitter must be within [0, 90) degrees, got {}", jitter)
            }
        }
    }
}

impl std::error::Error for WheelConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    pub spin_duration: Duration,
    pub history_limit: usize,
    pub min_extra_turns: u32,
    pub max_extra_turns: u32,
    pub jitter_degrees: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration: Duration::from_millis(SPIN_DURATION_MS),
            history_limit: HISTORY_LIMIT,
            min_extra_turns: MIN_EXTRA_TURNS,
            max_extra_turns: MAX_EXTRA_TURNS,
            jitter_degrees: JITTER_DEGREES,
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), WheelConfigError> {
        if self.min_extra_turns < 2 {
            return Err(WheelConfigError::TooFewTurns(self.min_extra_turns));
        }
        if self.max_extra_turns < self.min_extra_turns {
            return Err(WheelConfigError::TurnRangeInverted {
                min: self.min_extra_turns,
                max: self.max_extra_turns,
            });
        }
        if self.history_limit == 0 {
            return Err(WheelConfigError::EmptyHistory);
        }
        if self.spin_duration.is_zero() {
            return Err(WheelConfigError::ZeroDuration);
        }
        // Past 90 degrees a jittered stop could cross into the other half
        if !(0.0..90.0).contains(&self.jitter_degrees) {
            return Err(WheelConfigError::JitterOutOfRange(self.jitter_degrees));
        }
        Ok(())
    }
}

/// What a started spin will do, handed to whoever schedules the completion.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub outcome: Outcome,
    pub extra_turns: u32,
    pub delta_degrees: f64,
    pub target_rotation_degrees: f64,
    pub duration: Duration,
}

pub struct WheelEngine<R> {
    config: WheelConfig,
    random: R,
    state: SpinState,
    pending: Option<Outcome>,
}

impl<R: SpinRandom> WheelEngine<R> {
    pub fn new(random: R) -> Self {
        Self {
            config: WheelConfig::default(),
            random,
            state: SpinState::default(),
            pending: None,
        }
    }

    pub fn with_config(config: WheelConfig, random: R) -> Result<Self, WheelConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            random,
            state: SpinState::default(),
            pending: None,
        })
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Starts a spin. Returns `None` without touching anything while a spin is
    /// already in flight (the spin control is disabled in that state).
    pub fn spin(&mut self) -> Option<SpinPlan> {
        if self.state.is_spinning() {
            log::debug!("Ignoring spin request while the wheel is turning");
            return None;
        }

        let plan = self.plan_spin();
        self.state.current_rotation_degrees = plan.target_rotation_degrees;
        self.state.phase = Phase::Spinning;
        self.pending = Some(plan.outcome);

        log::debug!(
            "Spin started: {:?}, {} extra turns, {:.1} degrees",
            plan.outcome,
            plan.extra_turns,
            plan.delta_degrees
        );
        Some(plan)
    }

    /// Lands the in-flight spin: back to idle, outcome recorded in one step.
    pub fn complete_spin(&mut self) -> Option<Outcome> {
        let outcome = self.pending.take()?;

        self.state.phase = Phase::Idle;
        self.state.last_outcome = Some(outcome);
        self.state.history.push_front(outcome);
        self.state.history.truncate(self.config.history_limit);

        log::debug!("Spin completed: {:?}", outcome);
        Some(outcome)
    }

    fn plan_spin(&mut self) -> SpinPlan {
        let outcome = if self.random.unit() < 0.5 {
            Outcome::Yes
        } else {
            Outcome::No
        };

        let span = self.config.max_extra_turns - self.config.min_extra_turns + 1;
        let extra_turns =
            self.config.min_extra_turns + ((self.random.unit() * span as f64) as u32).min(span - 1);

        let jitter = (self.random.unit() * 2.0 - 1.0) * self.config.jitter_degrees;
        let target_pointer = outcome.pointer_center() + jitter;

        // Face orientation that puts `target_pointer` under the pointer, reached
        // by turning forward from wherever the face currently rests.
        let target_face = (FULL_TURN - target_pointer).rem_euclid(FULL_TURN);
        let current_face = self.state.current_rotation_degrees.rem_euclid(FULL_TURN);
        let alignment = (target_face - current_face).rem_euclid(FULL_TURN);

        let delta_degrees = extra_turns as f64 * FULL_TURN + alignment;

        SpinPlan {
            outcome,
            extra_turns,
            delta_degrees,
            target_rotation_degrees: self.state.current_rotation_degrees + delta_degrees,
            duration: self.config.spin_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FORCE_YES: f64 = 0.25;
    const FORCE_NO: f64 = 0.75;

    /// Replays `(outcome, turns, jitter)` draws, one triple per spin.
    fn scripted(draws: Vec<f64>) -> impl FnMut() -> f64 {
        let mut draws = draws.into_iter().cycle();
        move || draws.next().unwrap()
    }

    fn outcomes_script(outcomes: &[Outcome]) -> Vec<f64> {
        outcomes
            .iter()
            .flat_map(|outcome| {
                let u = match outcome {
                    Outcome::Yes => FORCE_YES,
                    Outcome::No => FORCE_NO,
                };
                [u, 0.5, 0.5]
            })
            .collect()
    }

    fn seeded(seed: u64) -> WheelEngine<RngSource<StdRng>> {
        WheelEngine::new(RngSource::new(StdRng::seed_from_u64(seed)))
    }

    #[test]
    fn test_new_engine_starts_idle() {
        let engine = seeded(1);
        let state = engine.state();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.current_rotation_degrees, 0.0);
        assert_eq!(state.last_outcome, None);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_forced_yes_spin() {
        let mut engine = WheelEngine::new(|| FORCE_YES);

        let plan = engine.spin().expect("idle engine should spin");
        assert_eq!(plan.outcome, Outcome::Yes);
        assert_eq!(engine.state().phase, Phase::Spinning);
        assert_eq!(engine.state().last_outcome, None);

        assert_eq!(engine.complete_spin(), Some(Outcome::Yes));
        let state = engine.state();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.last_outcome, Some(Outcome::Yes));
        assert_eq!(state.history, VecDeque::from(vec![Outcome::Yes]));
        assert!(state.current_rotation_degrees > 0.0);
        let angle = state.pointer_angle();
        assert!((0.0..180.0).contains(&angle), "pointer at {}", angle);
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut engine = seeded(7);
        engine.spin();
        let before = engine.state().clone();

        assert!(engine.spin().is_none());
        assert!(engine.spin().is_none());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_complete_without_pending_spin_is_noop() {
        let mut engine = seeded(3);
        assert_eq!(engine.complete_spin(), None);
        assert_eq!(engine.state(), &SpinState::default());

        engine.spin();
        assert!(engine.complete_spin().is_some());
        let landed = engine.state().clone();
        assert_eq!(engine.complete_spin(), None);
        assert_eq!(engine.state(), &landed);
    }

    #[test]
    fn test_rotation_strictly_increases() {
        let mut engine = seeded(42);
        let mut previous = engine.state().current_rotation_degrees;
        for _ in 0..500 {
            engine.spin();
            engine.complete_spin();
            let current = engine.state().current_rotation_degrees;
            assert!(current > previous, "{} should exceed {}", current, previous);
            previous = current;
        }
    }

    #[test]
    fn test_resting_angle_matches_outcome_every_spin() {
        let mut engine = seeded(2024);
        for _ in 0..2_000 {
            let plan = engine.spin().unwrap();
            let outcome = engine.complete_spin().unwrap();
            assert_eq!(plan.outcome, outcome);
            assert_eq!(decode_outcome(engine.state().current_rotation_degrees), outcome);

            let angle = engine.state().pointer_angle();
            match outcome {
                Outcome::Yes => assert!((0.0..180.0).contains(&angle)),
                Outcome::No => assert!((180.0..360.0).contains(&angle)),
            }
        }
    }

    #[test]
    fn test_outcome_frequency_is_fair() {
        let mut engine = seeded(0xDEC1DE);
        let spins = 10_000;
        let mut yes = 0;
        for _ in 0..spins {
            engine.spin();
            if engine.complete_spin() == Some(Outcome::Yes) {
                yes += 1;
            }
        }
        // Five standard deviations of a fair coin over 10k flips
        assert!((4_750..=5_250).contains(&yes), "{} yes out of {}", yes, spins);
    }

    #[test]
    fn test_extra_turns_stay_in_range() {
        let mut engine = seeded(99);
        let config = engine.config().clone();
        for _ in 0..1_000 {
            let plan = engine.spin().unwrap();
            engine.complete_spin();
            assert!(plan.extra_turns >= config.min_extra_turns);
            assert!(plan.extra_turns <= config.max_extra_turns);
            assert!(plan.delta_degrees >= config.min_extra_turns as f64 * 360.0);
            assert!(plan.delta_degrees < (config.max_extra_turns + 1) as f64 * 360.0);
        }
    }

    #[test]
    fn test_same_outcome_does_not_rest_on_identical_angle() {
        let mut engine = seeded(5);
        let mut yes_angles = Vec::new();
        while yes_angles.len() < 10 {
            engine.spin();
            if engine.complete_spin() == Some(Outcome::Yes) {
                yes_angles.push(engine.state().pointer_angle());
            }
        }
        let first = yes_angles[0];
        assert!(yes_angles.iter().any(|angle| (angle - first).abs() > 1e-6));
    }

    #[test]
    fn test_history_evicts_oldest() {
        use Outcome::{No, Yes};
        let mut engine = WheelEngine::new(scripted(outcomes_script(&[No, Yes, No, Yes, No, Yes])));

        for _ in 0..5 {
            engine.spin();
            engine.complete_spin();
        }
        assert_eq!(engine.state().history, VecDeque::from(vec![No, Yes, No, Yes, No]));

        engine.spin();
        engine.complete_spin();
        assert_eq!(engine.state().history, VecDeque::from(vec![Yes, No, Yes, No, Yes]));
        assert_eq!(engine.state().last_outcome, Some(Yes));
    }

    #[test]
    fn test_history_keeps_most_recent_outcomes() {
        let mut engine = seeded(11);
        let mut landed = Vec::new();
        for _ in 0..23 {
            engine.spin();
            landed.push(engine.complete_spin().unwrap());
            assert!(engine.state().history.len() <= HISTORY_LIMIT);
        }
        let expected: VecDeque<Outcome> = landed.iter().rev().take(HISTORY_LIMIT).copied().collect();
        assert_eq!(engine.state().history, expected);
    }

    #[test]
    fn test_pointer_angle_boundaries() {
        assert_eq!(pointer_angle(0.0), 0.0);
        assert_eq!(decode_outcome(0.0), Outcome::Yes);
        // Face turned half way: the NO half starts under the pointer
        assert_eq!(pointer_angle(180.0), 180.0);
        assert_eq!(decode_outcome(180.0), Outcome::No);
        assert_eq!(pointer_angle(270.0), 90.0);
        assert_eq!(decode_outcome(270.0), Outcome::Yes);
        assert_eq!(decode_outcome(90.0), Outcome::No);
        assert_eq!(decode_outcome(720.0 + 270.0), Outcome::Yes);
        assert_eq!(pointer_angle(-90.0), 90.0);
    }

    #[test]
    fn test_config_validation() {
        assert!(WheelConfig::default().validate().is_ok());

        let too_few = WheelConfig { min_extra_turns: 1, ..WheelConfig::default() };
        assert_eq!(too_few.validate(), Err(WheelConfigError::TooFewTurns(1)));

        let inverted = WheelConfig { min_extra_turns: 6, max_extra_turns: 3, ..WheelConfig::default() };
        assert_eq!(
            inverted.validate(),
            Err(WheelConfigError::TurnRangeInverted { min: 6, max: 3 })
        );

        let no_history = WheelConfig { history_limit: 0, ..WheelConfig::default() };
        assert!(WheelEngine::with_config(no_history, || 0.1).is_err());

        let wild = WheelConfig { jitter_degrees: 120.0, ..WheelConfig::default() };
        assert_eq!(wild.validate(), Err(WheelConfigError::JitterOutOfRange(120.0)));
    }

    #[test]
    fn test_custom_history_limit() {
        let config = WheelConfig { history_limit: 2, ..WheelConfig::default() };
        let mut engine = WheelEngine::with_config(config, || FORCE_NO).unwrap();
        for _ in 0..4 {
            engine.spin();
            engine.complete_spin();
        }
        assert_eq!(engine.state().history.len(), 2);
    }
}
