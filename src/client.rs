//! `AwardWallet` client.
//!
//! Provides the primary interface for the Business API.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{
    AccountsClient, ConnectedUsersClient, ConnectionsClient, MembersClient, ProvidersClient,
};
use crate::error::Error;
use crate::transport::{HttpTransport, RetryConfig};

/// Default base URL for the Business API.
pub const DEFAULT_BASE_URL: &str = "https://business.awardwallet.com/api/export/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "AWARDWALLET_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "AWARDWALLET_BASE_URL";

/// Main client for the `AwardWallet` Business API.
///
/// Aggregates all resource clients over one shared transport.
///
/// # Example
///
/// ```rust,no_run
/// use awardwallet::AwardWalletClient;
///
/// # async fn run() -> Result<(), awardwallet::Error> {
/// let client = AwardWalletClient::new("my-api-key", None, None, None)?;
///
/// for member in client.members().list().await? {
///     println!("{} has {} accounts", member.full_name, member.accounts_index.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct AwardWalletClient {
    transport: Arc<HttpTransport>,
    providers: ProvidersClient,
    accounts: AccountsClient,
    members: MembersClient,
    connected_users: ConnectedUsersClient,
    connections: ConnectionsClient,
}

impl AwardWalletClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Business API key
    /// * `base_url` - Base URL for API requests (default: [`DEFAULT_BASE_URL`])
    /// * `timeout` - Request timeout (default: 30 seconds)
    /// * `retry_config` - Configuration for retry behavior (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP transport cannot
    /// be created.
    pub fn new(
        api_key: &str,
        base_url: Option<&str>,
        timeout: Option<Duration>,
        retry_config: Option<RetryConfig>,
    ) -> Result<Self, Error> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::Configuration("API key must not be empty".to_string()));
        }

        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(
            base_url,
            api_key,
            timeout,
            retry_config,
        )?);

        Ok(Self {
            providers: ProvidersClient::new(Arc::clone(&transport)),
            accounts: AccountsClient::new(Arc::clone(&transport)),
            members: MembersClient::new(Arc::clone(&transport)),
            connected_users: ConnectedUsersClient::new(Arc::clone(&transport)),
            connections: ConnectionsClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `AWARDWALLET_API_KEY` - Business API key (required)
    /// * `AWARDWALLET_BASE_URL` - Base URL for API (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_with_config(None, None)
    }

    /// Create a client from environment variables with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env_with_config(
        timeout: Option<Duration>,
        retry_config: Option<RetryConfig>,
    ) -> Result<Self, Error> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| Error::Configuration(format!("{API_KEY_ENV} environment variable not set")))?;
        let base_url = env::var(BASE_URL_ENV).ok();

        Self::new(&api_key, base_url.as_deref(), timeout, retry_config)
    }

    /// Get the underlying HTTP transport (for advanced use cases).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Get the providers client.
    #[must_use]
    pub fn providers(&self) -> &ProvidersClient {
        &self.providers
    }

    /// Get the accounts client.
    #[must_use]
    pub fn accounts(&self) -> &AccountsClient {
        &self.accounts
    }

    /// Get the members client.
    #[must_use]
    pub fn members(&self) -> &MembersClient {
        &self.members
    }

    /// Get the connected users client.
    #[must_use]
    pub fn connected_users(&self) -> &ConnectedUsersClient {
        &self.connected_users
    }

    /// Get the connections client.
    #[must_use]
    pub fn connections(&self) -> &ConnectionsClient {
        &self.connections
    }
}
