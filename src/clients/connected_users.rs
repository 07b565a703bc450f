//! Connected users resource client.

use std::sync::Arc;

use serde_json::Value;

use super::list_from_value;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{ConnectedUserDetails, ConnectedUserListItem};

/// Client for users connected to the business.
pub struct ConnectedUsersClient {
    transport: Arc<HttpTransport>,
}

impl ConnectedUsersClient {
    /// Create a new connected users client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List all connected users with an index of their shared accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<ConnectedUserListItem>, Error> {
        let response: Value = self.transport.get("/connectedUser", None).await?;
        list_from_value(response, "connectedUsers")
    }

    /// Get one connected user with the accounts they share.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or no longer connected.
    pub async fn get(&self, user_id: i64) -> Result<ConnectedUserDetails, Error> {
        self.transport
            .get(&format!("/connectedUser/{user_id}"), None)
            .await
    }
}
