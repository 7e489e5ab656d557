//! Plates Reducer

use crate::actions::{Action, PlatesAction};
use crate::state::PlatesState;
use flux_store::ReduceError;

/// Reducer for the plate counter
///
/// Refuses to take a plate from an empty stack; the store keeps the
/// previous state in that case.
pub fn reduce(state: PlatesState, action: &Action) -> Result<PlatesState, ReduceError> {
    match action {
        Action::Plates(PlatesAction::ReducePlates) => match state.plates.checked_sub(1) {
            Some(plates) => Ok(PlatesState { plates }),
            None => Err(ReduceError::rejected("ReducePlates", "no plates left")),
        },
        _ => Ok(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::shop::order_pizza;
    use flux_store::{fallible, replay, Store};

    #[test]
    fn test_reduce_plates_three_times() {
        let store = Store::new(fallible(reduce));
        for _ in 0..3 {
            store.dispatch(PlatesAction::ReducePlates.into()).unwrap();
        }
        assert_eq!(store.state().plates, 97);
    }

    #[test]
    fn test_foreign_action_is_ignored() {
        let state = reduce(PlatesState::default(), &order_pizza()).unwrap();
        assert_eq!(state, PlatesState::default());
    }

    #[test]
    fn test_empty_stack_is_rejected() {
        let store = Store::with_state(fallible(reduce), PlatesState { plates: 0 });
        assert!(store.dispatch(PlatesAction::ReducePlates.into()).is_err());
        assert_eq!(store.state().plates, 0);
    }

    #[test]
    fn test_replay_matches_store() {
        let actions: Vec<Action> = vec![
            PlatesAction::ReducePlates.into(),
            Action::None,
            PlatesAction::ReducePlates.into(),
        ];
        let store = Store::new(fallible(reduce));
        for action in actions.clone() {
            store.dispatch(action).unwrap();
        }
        let replayed = replay(&fallible(reduce), PlatesState::default(), &actions).unwrap();
        assert_eq!(*store.state(), replayed);
    }
}
