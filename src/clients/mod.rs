//! Resource clients for the `AwardWallet` Business API.

pub mod accounts;
pub mod connected_users;
pub mod connections;
pub mod members;
pub mod providers;

// Re-exports
pub use accounts::AccountsClient;
pub use connected_users::ConnectedUsersClient;
pub use connections::ConnectionsClient;
pub use members::MembersClient;
pub use providers::ProvidersClient;

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::error::Error;

/// Decode a list endpoint body.
///
/// The list endpoints answer either with a bare array or with an object
/// holding the array under `key`. Any other shape is a serialization error.
pub(crate) fn list_from_value<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, Error> {
    match value {
        Value::Object(mut map) => match map.remove(key) {
            Some(list) => serde_json::from_value(list).map_err(Error::from),
            None => Err(Error::from(serde_json::Error::custom(format!(
                "missing field `{key}`"
            )))),
        },
        other => serde_json::from_value(other).map_err(Error::from),
    }
}

/// Validate and percent-encode a caller supplied path segment.
pub(crate) fn path_segment(name: &str, value: &str) -> Result<String, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Validation(format!("{name} must not be empty")));
    }
    Ok(urlencoding::encode(value).into_owned())
}
