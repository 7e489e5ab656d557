//! Shop Reducer
//!
//! Root reducer for the shop store, combining the pizza and burger slices.

use super::{burger_reducer, pizza_reducer};
use crate::actions::Action;
use crate::state::ShopState;
use flux_store::{combine_reducers, Reducer};

pub fn shop_reducer() -> impl Reducer<ShopState, Action> + Send + Sync + 'static {
    combine_reducers!(ShopState<Action> {
        pizza: pizza_reducer::reduce,
        burger: burger_reducer::reduce,
    })
}
