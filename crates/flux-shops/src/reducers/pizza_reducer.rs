//! Pizza Reducer

use crate::actions::{Action, ShopAction};
use crate::state::PizzaState;

pub fn reduce(mut state: PizzaState, action: &Action) -> PizzaState {
    match action {
        Action::Shop(ShopAction::OrderPizza { .. }) => {
            state.pizza_base = state.pizza_base.saturating_sub(1);
        }
        Action::Shop(ShopAction::AddTopping(topping)) => {
            state.toppings.push(topping.clone());
        }
        _ => {
            // Unhandled actions - no state change
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::shop::{add_topping, order_burger, order_pizza};

    #[test]
    fn test_order_pizza_uses_a_base() {
        let state = reduce(PizzaState::default(), &order_pizza());
        assert_eq!(state.pizza_base, 99);
    }

    #[test]
    fn test_add_topping_appends() {
        let state = reduce(PizzaState::default(), &add_topping("matata"));
        assert_eq!(state.toppings, vec!["cheese", "capsicum", "matata"]);
    }

    #[test]
    fn test_burger_order_is_ignored() {
        let state = reduce(PizzaState::default(), &order_burger());
        assert_eq!(state, PizzaState::default());
    }
}
