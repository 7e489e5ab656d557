//! Actions module
//!
//! Every store in this application takes the same root `Action`, tagged by
//! domain. Reducers match the variants they own and hand the state back
//! untouched for everything else.

pub mod plates;
pub mod posts;
pub mod products;
pub mod shop;
pub mod todos;
pub mod users;

pub use plates::PlatesAction;
pub use posts::PostsAction;
pub use products::ProductsAction;
pub use shop::ShopAction;
pub use todos::TodoAction;
pub use users::UsersAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Plate counter actions
    Plates(PlatesAction),
    /// Pizza and burger shop actions
    Shop(ShopAction),
    /// Product catalog fetch lifecycle
    Products(ProductsAction),
    /// Todo list actions
    Todos(TodoAction),
    /// Blog post actions
    Posts(PostsAction),
    /// Blog user actions
    Users(UsersAction),

    /// No-op action
    None,
}

impl From<PlatesAction> for Action {
    fn from(action: PlatesAction) -> Self {
        Action::Plates(action)
    }
}

impl From<ShopAction> for Action {
    fn from(action: ShopAction) -> Self {
        Action::Shop(action)
    }
}

impl From<ProductsAction> for Action {
    fn from(action: ProductsAction) -> Self {
        Action::Products(action)
    }
}

impl From<TodoAction> for Action {
    fn from(action: TodoAction) -> Self {
        Action::Todos(action)
    }
}

impl From<PostsAction> for Action {
    fn from(action: PostsAction) -> Self {
        Action::Posts(action)
    }
}

impl From<UsersAction> for Action {
    fn from(action: UsersAction) -> Self {
        Action::Users(action)
    }
}
