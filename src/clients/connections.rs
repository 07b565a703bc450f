//! Connection flow resource client.

use std::sync::Arc;

use super::path_segment;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{AuthUrl, AuthUrlRequest, ConnectionInfo};

/// Client for connecting new users to the business.
pub struct ConnectionsClient {
    transport: Arc<HttpTransport>,
}

impl ConnectionsClient {
    /// Create a new connections client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create the URL a user opens to approve a connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected.
    pub async fn create_auth_url(&self, request: &AuthUrlRequest) -> Result<AuthUrl, Error> {
        tracing::debug!(
            platform = %request.platform,
            access_level = request.access_level.code(),
            granular_sharing = request.granular_sharing,
            "creating auth url"
        );
        self.transport.post("/create-auth-url", request).await
    }

    /// Resolve the code received on the redirect into the connected user id.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an empty code, or an error if the code
    /// is unknown or expired.
    pub async fn get_connection_info(&self, code: &str) -> Result<ConnectionInfo, Error> {
        let code = path_segment("connection code", code)?;
        self.transport
            .get(&format!("/get-connection-info/{code}"), None)
            .await
    }
}
