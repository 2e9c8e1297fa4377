//! Slide position tracking.
//!
//! [`NavigationState`] is a plain value with pure transitions; [`Navigator`]
//! owns one and tells its two observers about every successful change.

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("slide {target} is outside 1..={total}")]
    OutOfRange { target: i64, total: usize },
    #[error("a presentation needs at least one slide")]
    EmptyDeck,
}

/// 1-based slide position. `1 <= current <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    total: usize,
}

impl NavigationState {
    pub fn new(total: usize) -> Result<Self, NavigationError> {
        if total == 0 {
            return Err(NavigationError::EmptyDeck);
        }
        Ok(Self { current: 1, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Zero-based index of the current slide.
    pub fn index(&self) -> usize {
        self.current - 1
    }

    /// Fraction of the deck shown so far, in `(0, 1]`.
    pub fn progress(&self) -> f32 {
        self.current as f32 / self.total as f32
    }

    /// Moves by `delta`, saturating at the first and last slide.
    pub fn advanced(self, delta: i64) -> Self {
        let next = (self.current as i128 + i128::from(delta)).clamp(1, self.total as i128);
        Self { current: next as usize, ..self }
    }

    pub fn jumped_to(self, target: i64) -> Result<Self, NavigationError> {
        if target < 1 || target as u64 > self.total as u64 {
            return Err(NavigationError::OutOfRange { target, total: self.total });
        }
        Ok(Self { current: target as usize, ..self })
    }
}

/// Receives `(current, total)` after every change.
pub trait CounterObserver {
    fn counter_changed(&mut self, current: usize, total: usize) -> anyhow::Result<()>;
}

/// Receives `current / total` after every change.
pub trait ProgressObserver {
    fn progress_changed(&mut self, fraction: f32) -> anyhow::Result<()>;
}

pub struct Navigator<C, P> {
    state: NavigationState,
    counter: C,
    progress: P,
}

impl<C: CounterObserver, P: ProgressObserver> Navigator<C, P> {
    /// Starts on slide 1 and reports that position to both observers.
    pub fn new(total: usize, counter: C, progress: P) -> Result<Self, NavigationError> {
        let mut navigator = Self {
            state: NavigationState::new(total)?,
            counter,
            progress,
        };
        navigator.notify();
        Ok(navigator)
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn advance(&mut self, delta: i64) -> NavigationState {
        self.state = self.state.advanced(delta);
        debug!(delta, current = self.state.current, "advanced");
        self.notify();
        self.state
    }

    pub fn jump_to(&mut self, target: i64) -> Result<NavigationState, NavigationError> {
        self.state = self.state.jumped_to(target)?;
        debug!(target, "jumped");
        self.notify();
        Ok(self.state)
    }

    // Observer failures stay with the observer; the new state is kept either way.
    fn notify(&mut self) {
        let NavigationState { current, total } = self.state;
        if let Err(e) = self.counter.counter_changed(current, total) {
            warn!("counter observer failed: {e:#}");
        }
        if let Err(e) = self.progress.progress_changed(self.state.progress()) {
            warn!("progress observer failed: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Counter(Log);
    struct Progress(Log);
    struct BrokenCounter;

    impl CounterObserver for Counter {
        fn counter_changed(&mut self, current: usize, total: usize) -> anyhow::Result<()> {
            self.0.borrow_mut().push(format!("counter {current}/{total}"));
            Ok(())
        }
    }

    impl ProgressObserver for Progress {
        fn progress_changed(&mut self, fraction: f32) -> anyhow::Result<()> {
            self.0.borrow_mut().push(format!("progress {fraction:.3}"));
            Ok(())
        }
    }

    impl CounterObserver for BrokenCounter {
        fn counter_changed(&mut self, _: usize, _: usize) -> anyhow::Result<()> {
            bail!("display went away")
        }
    }

    fn navigator(total: usize) -> (Navigator<Counter, Progress>, Log) {
        let log = Log::default();
        let nav = Navigator::new(total, Counter(log.clone()), Progress(log.clone())).unwrap();
        log.borrow_mut().clear();
        (nav, log)
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(NavigationState::new(0), Err(NavigationError::EmptyDeck));
    }

    #[test]
    fn construction_reports_first_slide() {
        let log = Log::default();
        let _nav = Navigator::new(4, Counter(log.clone()), Progress(log.clone())).unwrap();
        assert_eq!(*log.borrow(), vec!["counter 1/4", "progress 0.250"]);
    }

    #[test]
    fn presentation_walkthrough() {
        let (mut nav, _) = navigator(13);
        assert_eq!(nav.advance(1).current(), 2);
        assert_eq!(nav.advance(-5).current(), 1);
        assert_eq!(nav.jump_to(13).unwrap().current(), 13);
        assert_eq!(
            nav.jump_to(14),
            Err(NavigationError::OutOfRange { target: 14, total: 13 })
        );
        assert_eq!(nav.state().current(), 13);
        assert_eq!(nav.advance(1).current(), 13);
    }

    #[test]
    fn observers_run_counter_then_progress() {
        let (mut nav, log) = navigator(4);
        nav.advance(1);
        assert_eq!(*log.borrow(), vec!["counter 2/4", "progress 0.500"]);
    }

    #[test]
    fn zero_advance_still_notifies() {
        let (mut nav, log) = navigator(3);
        let before = nav.state();
        assert_eq!(nav.advance(0), before);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn rejected_jump_is_silent() {
        let (mut nav, log) = navigator(3);
        assert!(nav.jump_to(0).is_err());
        assert!(nav.jump_to(-7).is_err());
        assert!(nav.jump_to(4).is_err());
        assert!(log.borrow().is_empty());
        assert_eq!(nav.state().current(), 1);
    }

    #[test]
    fn failing_counter_keeps_state_and_reaches_progress() {
        let log = Log::default();
        let mut nav = Navigator::new(5, BrokenCounter, Progress(log.clone())).unwrap();
        assert_eq!(nav.advance(2).current(), 3);
        assert_eq!(log.borrow().last().map(String::as_str), Some("progress 0.600"));
    }

    #[test]
    fn extreme_deltas_saturate() {
        let state = NavigationState::new(9).unwrap();
        assert_eq!(state.advanced(i64::MAX).current(), 9);
        assert_eq!(state.advanced(i64::MIN).current(), 1);
        assert_eq!(state.jumped_to(i64::MAX).map(|s| s.current()).ok(), None);
    }

    fn any_state() -> impl Strategy<Value = NavigationState> {
        (1usize..200).prop_flat_map(|total| {
            (1..=total).prop_map(move |current| NavigationState { current, total })
        })
    }

    proptest! {
        #[test]
        fn advance_stays_in_bounds(state in any_state(), delta in any::<i64>()) {
            let next = state.advanced(delta);
            prop_assert!(next.current() >= 1);
            prop_assert!(next.current() <= next.total());
            prop_assert_eq!(next.total(), state.total());
        }

        #[test]
        fn jump_within_bounds_lands_exactly(state in any_state(), pick in any::<prop::sample::Index>()) {
            let target = pick.index(state.total()) + 1;
            prop_assert_eq!(state.jumped_to(target as i64).unwrap().current(), target);
        }

        #[test]
        fn jump_outside_bounds_is_rejected(state in any_state(), over in 1i64..1000, under in 0i64..1000) {
            let too_high = state.total() as i64 + over;
            prop_assert!(state.jumped_to(too_high).is_err());
            prop_assert!(state.jumped_to(-under).is_err());
        }

        #[test]
        fn jump_then_relative_advance_reaches_target(
            state in any_state(),
            k in any::<prop::sample::Index>(),
            j in any::<prop::sample::Index>(),
        ) {
            let k = k.index(state.total()) as i64 + 1;
            let j = j.index(state.total()) as i64 + 1;
            let landed = state.jumped_to(k).unwrap().advanced(-k + j);
            prop_assert_eq!(landed.current() as i64, j);
        }

        #[test]
        fn progress_is_a_fraction(state in any_state()) {
            let p = state.progress();
            prop_assert!(p > 0.0 && p <= 1.0);
        }
    }
}
