//! Effect scheduling for the counter.
//!
//! Two effects are declared, in this order:
//! - one depending on `value`: runs on the first commit and whenever `value` changes
//! - one with no dependencies: runs once per mount

use super::state::CounterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEffect {
    ValueChanged(i64),
    Mounted,
}

impl CounterEffect {
    pub fn message(&self) -> &'static str {
        match self {
            CounterEffect::ValueChanged(_) => "Hello UseEffect",
            CounterEffect::Mounted => "Second effect",
        }
    }
}

/// Remembers the dependencies seen at the previous commit.
///
/// A fresh tracker corresponds to a fresh mount.
#[derive(Debug, Clone, Default)]
pub struct EffectTracker {
    last_value: Option<i64>,
    mounted: bool,
}

impl EffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commit of `state` and return the effects to run, in declaration order.
    pub fn commit(&mut self, state: &CounterState) -> Vec<CounterEffect> {
        let mut effects = Vec::new();

        if self.last_value != Some(state.value) {
            self.last_value = Some(state.value);
            effects.push(CounterEffect::ValueChanged(state.value));
        }

        if !self.mounted {
            self.mounted = true;
            effects.push(CounterEffect::Mounted);
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_commit_runs_both_in_order() {
        let mut tracker = EffectTracker::new();
        let effects = tracker.commit(&CounterState { value: 0 });
        assert_eq!(
            effects,
            vec![CounterEffect::ValueChanged(0), CounterEffect::Mounted]
        );
    }

    #[test]
    fn unchanged_value_runs_nothing() {
        let mut tracker = EffectTracker::new();
        tracker.commit(&CounterState { value: 0 });
        assert!(tracker.commit(&CounterState { value: 0 }).is_empty());
    }

    #[test]
    fn changed_value_runs_only_value_effect() {
        let mut tracker = EffectTracker::new();
        tracker.commit(&CounterState { value: 0 });
        assert_eq!(
            tracker.commit(&CounterState { value: 1 }),
            vec![CounterEffect::ValueChanged(1)]
        );
    }
}
