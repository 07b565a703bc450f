//! Members resource client.

use std::sync::Arc;

use serde_json::Value;

use super::list_from_value;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{MemberDetails, MemberListItem};

/// Client for the members managed by the business.
pub struct MembersClient {
    transport: Arc<HttpTransport>,
}

impl MembersClient {
    /// Create a new members client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List all members with an index of their accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<MemberListItem>, Error> {
        let response: Value = self.transport.get("/member", None).await?;
        list_from_value(response, "members")
    }

    /// Get one member with all their accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is not found.
    pub async fn get(&self, member_id: i64) -> Result<MemberDetails, Error> {
        self.transport
            .get(&format!("/member/{member_id}"), None)
            .await
    }
}
