//! Burger Reducer

use crate::actions::{Action, ShopAction};
use crate::state::BurgerState;

pub fn reduce(mut state: BurgerState, action: &Action) -> BurgerState {
    if let Action::Shop(ShopAction::OrderBurger { .. }) = action {
        state.burger_buns = state.burger_buns.saturating_sub(1);
    }
    state
}
