use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                value: state.value.saturating_add(1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_adds_one() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
        let state = CounterReducer::reduce(state, CounterIntent::Increment);
        assert_eq!(state.value, 2);
    }

    #[test]
    fn increment_saturates() {
        let state = CounterReducer::reduce(
            CounterState { value: i64::MAX },
            CounterIntent::Increment,
        );
        assert_eq!(state.value, i64::MAX);
    }
}
