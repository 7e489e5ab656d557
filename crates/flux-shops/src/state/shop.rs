//! Pizza and burger shop state

use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaState {
    pub pizza_base: u32,
    pub toppings: Vec<String>,
}

impl Default for PizzaState {
    fn default() -> Self {
        Self {
            pizza_base: 100,
            toppings: vec!["cheese".to_string(), "capsicum".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurgerState {
    pub burger_buns: u32,
}

impl Default for BurgerState {
    fn default() -> Self {
        Self { burger_buns: 100 }
    }
}

/// Root state of the shop store, one slice per counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopState {
    pub pizza: Arc<PizzaState>,
    pub burger: Arc<BurgerState>,
}
