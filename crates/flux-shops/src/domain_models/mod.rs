//! Domain models
//!
//! Plain data carried by actions and held in state slices.

pub mod fetch_status;
pub mod post;
pub mod product;
pub mod todo;
pub mod user;

pub use fetch_status::FetchStatus;
pub use post::{Post, ReactionKind, RemotePost};
pub use product::Product;
pub use todo::Todo;
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Remote sources send numeric ids; the store keys everything by string
pub(crate) fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(id) => id.to_string(),
        RawId::Text(id) => id,
    })
}
