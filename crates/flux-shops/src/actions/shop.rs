//! Pizza and burger shop actions

use super::Action;

pub const PIZZA_SHOP: &str = "Pizza shop";
pub const BURGER_SHOP: &str = "Burger shop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopAction {
    /// One pizza base used
    OrderPizza { shop_name: String },
    /// One burger bun used
    OrderBurger { shop_name: String },
    /// Extra topping offered on every pizza
    AddTopping(String),
}

pub fn order_pizza() -> Action {
    Action::Shop(ShopAction::OrderPizza {
        shop_name: PIZZA_SHOP.to_string(),
    })
}

pub fn order_burger() -> Action {
    Action::Shop(ShopAction::OrderBurger {
        shop_name: BURGER_SHOP.to_string(),
    })
}

pub fn add_topping(topping: impl Into<String>) -> Action {
    Action::Shop(ShopAction::AddTopping(topping.into()))
}
