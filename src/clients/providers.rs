//! Providers resource client.

use std::sync::Arc;

use serde_json::Value;

use super::{list_from_value, path_segment};
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{ProviderDetails, ProviderInfo};

/// Client for the supported loyalty provider catalogue.
pub struct ProvidersClient {
    transport: Arc<HttpTransport>,
}

impl ProvidersClient {
    /// Create a new providers client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List every provider `AwardWallet` supports.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<ProviderInfo>, Error> {
        let response: Value = self.transport.get("/providers/list", None).await?;
        list_from_value(response, "providers")
    }

    /// Get the details of one provider.
    ///
    /// # Arguments
    ///
    /// * `code` - Provider code as returned by [`ProvidersClient::list`]
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an empty code, or an error if the
    /// provider is not found.
    pub async fn get(&self, code: &str) -> Result<ProviderDetails, Error> {
        let code = path_segment("provider code", code)?;
        self.transport
            .get(&format!("/providers/{code}"), None)
            .await
    }
}
