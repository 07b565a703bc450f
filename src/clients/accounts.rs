//! Accounts resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::AccountDetails;

/// Client for loyalty account lookups.
pub struct AccountsClient {
    transport: Arc<HttpTransport>,
}

impl AccountsClient {
    /// Create a new accounts client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get a loyalty account together with its owning member or connected user.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is not found or not shared with the
    /// business.
    pub async fn get(&self, account_id: i64) -> Result<AccountDetails, Error> {
        self.transport
            .get(&format!("/account/{account_id}"), None)
            .await
    }
}
