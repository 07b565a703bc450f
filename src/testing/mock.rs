//! Mock `AwardWallet` client for testing.
//!
//! Provides a `MockAwardWalletClient` that mimics the real client interface
//! without making actual API calls.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::error::{ApiError, Error};
use crate::types::{
    Account, AccountDetails, AuthUrl, AuthUrlRequest, ConnectedUserDetails, ConnectedUserListItem,
    ConnectionInfo, MemberDetails, MemberListItem, ProviderDetails, ProviderInfo, ProviderKind,
};

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name (e.g., "members.get", "providers.list")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub struct MockResponse<T: Clone> {
    /// The data to return
    pub data: Option<T>,
    /// Error to return instead of data
    pub error: Option<ApiError>,
    /// Number of times this response has been used
    pub call_count: u32,
}

impl<T: Clone> Default for MockResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            call_count: 0,
        }
    }
}

impl<T: Clone> MockResponse<T> {
    /// Create a new mock response with data.
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Create a new mock response failing with the API error for `status`.
    pub fn with_error(status: u16, message: &str) -> Self {
        Self {
            error: Some(ApiError::from_status(status, message.to_string(), None)),
            ..Self::default()
        }
    }

    /// Get the result, returning either the configured data or error.
    fn get_result(&mut self, default: T) -> Result<T, Error> {
        self.call_count += 1;
        if let Some(error) = &self.error {
            return Err(Error::Api(error.clone()));
        }
        Ok(self.data.clone().unwrap_or(default))
    }
}

type Slot<T> = Arc<Mutex<MockResponse<T>>>;

fn slot<T: Clone>() -> Slot<T> {
    Arc::new(Mutex::new(MockResponse::default()))
}

fn configure<T: Clone>(slot: &Slot<T>, response: MockResponse<T>) {
    *slot.lock().unwrap_or_else(|e| e.into_inner()) = response;
}

fn respond<T: Clone>(slot: &Slot<T>, default: T) -> Result<T, Error> {
    slot.lock().unwrap_or_else(|e| e.into_inner()).get_result(default)
}

/// Internal state for the mock client.
#[derive(Default)]
struct MockClientState {
    calls: Vec<MockCall>,
}

type State = Arc<Mutex<MockClientState>>;

fn record_call(state: &State, method: &str, args: Vec<String>) {
    state
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .calls
        .push(MockCall::new(method, args));
}

/// Mock providers client for testing.
pub struct MockProvidersClient {
    mock: State,
    list_response: Slot<Vec<ProviderInfo>>,
    get_response: Slot<ProviderDetails>,
}

impl MockProvidersClient {
    fn new(mock: State) -> Self {
        Self {
            mock,
            list_response: slot(),
            get_response: slot(),
        }
    }

    /// Configure the response for list() calls.
    pub fn configure_list(&self, response: MockResponse<Vec<ProviderInfo>>) {
        configure(&self.list_response, response);
    }

    /// Configure the response for get() calls.
    pub fn configure_get(&self, response: MockResponse<ProviderDetails>) {
        configure(&self.get_response, response);
    }

    /// Mock list method.
    pub fn list(&self) -> Result<Vec<ProviderInfo>, Error> {
        record_call(&self.mock, "providers.list", vec![]);
        respond(&self.list_response, vec![])
    }

    /// Mock get method.
    pub fn get(&self, code: &str) -> Result<ProviderDetails, Error> {
        record_call(&self.mock, "providers.get", vec![code.to_string()]);

        let default = ProviderDetails {
            kind: ProviderKind::Other,
            code: code.to_string(),
            display_name: format!("Mock provider {code}"),
            ..ProviderDetails::default()
        };
        respond(&self.get_response, default)
    }
}

/// Mock accounts client for testing.
pub struct MockAccountsClient {
    mock: State,
    get_response: Slot<AccountDetails>,
}

impl MockAccountsClient {
    fn new(mock: State) -> Self {
        Self {
            mock,
            get_response: slot(),
        }
    }

    /// Configure the response for get() calls.
    pub fn configure_get(&self, response: MockResponse<AccountDetails>) {
        configure(&self.get_response, response);
    }

    /// Mock get method.
    pub fn get(&self, account_id: i64) -> Result<AccountDetails, Error> {
        record_call(&self.mock, "accounts.get", vec![account_id.to_string()]);

        let default = AccountDetails {
            account: vec![mock_account(account_id)],
            ..AccountDetails::default()
        };
        respond(&self.get_response, default)
    }
}

/// Mock members client for testing.
pub struct MockMembersClient {
    mock: State,
    list_response: Slot<Vec<MemberListItem>>,
    get_response: Slot<MemberDetails>,
}

impl MockMembersClient {
    fn new(mock: State) -> Self {
        Self {
            mock,
            list_response: slot(),
            get_response: slot(),
        }
    }

    /// Configure the response for list() calls.
    pub fn configure_list(&self, response: MockResponse<Vec<MemberListItem>>) {
        configure(&self.list_response, response);
    }

    /// Configure the response for get() calls.
    pub fn configure_get(&self, response: MockResponse<MemberDetails>) {
        configure(&self.get_response, response);
    }

    /// Mock list method.
    pub fn list(&self) -> Result<Vec<MemberListItem>, Error> {
        record_call(&self.mock, "members.list", vec![]);
        respond(&self.list_response, vec![])
    }

    /// Mock get method.
    pub fn get(&self, member_id: i64) -> Result<MemberDetails, Error> {
        record_call(&self.mock, "members.get", vec![member_id.to_string()]);

        let default = MemberDetails {
            member_id,
            full_name: "Mock Member".to_string(),
            ..MemberDetails::default()
        };
        respond(&self.get_response, default)
    }
}

/// Mock connected users client for testing.
pub struct MockConnectedUsersClient {
    mock: State,
    list_response: Slot<Vec<ConnectedUserListItem>>,
    get_response: Slot<ConnectedUserDetails>,
}

impl MockConnectedUsersClient {
    fn new(mock: State) -> Self {
        Self {
            mock,
            list_response: slot(),
            get_response: slot(),
        }
    }

    /// Configure the response for list() calls.
    pub fn configure_list(&self, response: MockResponse<Vec<ConnectedUserListItem>>) {
        configure(&self.list_response, response);
    }

    /// Configure the response for get() calls.
    pub fn configure_get(&self, response: MockResponse<ConnectedUserDetails>) {
        configure(&self.get_response, response);
    }

    /// Mock list method.
    pub fn list(&self) -> Result<Vec<ConnectedUserListItem>, Error> {
        record_call(&self.mock, "connected_users.list", vec![]);
        respond(&self.list_response, vec![])
    }

    /// Mock get method.
    pub fn get(&self, user_id: i64) -> Result<ConnectedUserDetails, Error> {
        record_call(&self.mock, "connected_users.get", vec![user_id.to_string()]);

        let default = ConnectedUserDetails {
            user_id,
            full_name: "Mock User".to_string(),
            status: "Connected".to_string(),
            ..ConnectedUserDetails::default()
        };
        respond(&self.get_response, default)
    }
}

/// Mock connections client for testing.
pub struct MockConnectionsClient {
    mock: State,
    create_auth_url_response: Slot<AuthUrl>,
    get_connection_info_response: Slot<ConnectionInfo>,
}

impl MockConnectionsClient {
    fn new(mock: State) -> Self {
        Self {
            mock,
            create_auth_url_response: slot(),
            get_connection_info_response: slot(),
        }
    }

    /// Configure the response for create_auth_url() calls.
    pub fn configure_create_auth_url(&self, response: MockResponse<AuthUrl>) {
        configure(&self.create_auth_url_response, response);
    }

    /// Configure the response for get_connection_info() calls.
    pub fn configure_get_connection_info(&self, response: MockResponse<ConnectionInfo>) {
        configure(&self.get_connection_info_response, response);
    }

    /// Mock create_auth_url method.
    pub fn create_auth_url(&self, request: &AuthUrlRequest) -> Result<AuthUrl, Error> {
        record_call(
            &self.mock,
            "connections.create_auth_url",
            vec![
                request.platform.to_string(),
                request.access_level.code().to_string(),
                format!("{:?}", request.state),
                request.granular_sharing.to_string(),
            ],
        );

        let default = AuthUrl {
            url: format!(
                "https://business.awardwallet.com/connect/mock?platform={}",
                request.platform
            ),
        };
        respond(&self.create_auth_url_response, default)
    }

    /// Mock get_connection_info method.
    pub fn get_connection_info(&self, code: &str) -> Result<ConnectionInfo, Error> {
        record_call(&self.mock, "connections.get_connection_info", vec![code.to_string()]);

        if code.trim().is_empty() {
            return Err(Error::Validation("connection code must not be empty".to_string()));
        }
        respond(&self.get_connection_info_response, ConnectionInfo { user_id: 1 })
    }
}

fn mock_account(account_id: i64) -> Account {
    Account {
        account_id,
        code: "mock".to_string(),
        display_name: "Mock Rewards".to_string(),
        kind: "Other".to_string(),
        balance: "0".to_string(),
        owner: "Mock Member".to_string(),
        error_code: 1,
        ..Account::default()
    }
}

/// Mock `AwardWallet` client for testing.
///
/// Mirrors the real client's resource clients synchronously, returning
/// configurable responses and recording every call.
///
/// # Example
///
/// ```rust
/// use awardwallet::testing::{MockAwardWalletClient, MockResponse};
///
/// let mock = MockAwardWalletClient::new();
/// mock.members().configure_get(MockResponse::with_error(404, "Member not found"));
///
/// assert!(mock.members().get(42).is_err());
/// assert!(mock.was_called("members.get"));
/// ```
pub struct MockAwardWalletClient {
    state: State,
    providers: MockProvidersClient,
    accounts: MockAccountsClient,
    members: MockMembersClient,
    connected_users: MockConnectedUsersClient,
    connections: MockConnectionsClient,
}

impl Default for MockAwardWalletClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAwardWalletClient {
    /// Create a new mock client.
    #[must_use]
    pub fn new() -> Self {
        let state: State = Arc::new(Mutex::new(MockClientState::default()));

        Self {
            providers: MockProvidersClient::new(Arc::clone(&state)),
            accounts: MockAccountsClient::new(Arc::clone(&state)),
            members: MockMembersClient::new(Arc::clone(&state)),
            connected_users: MockConnectedUsersClient::new(Arc::clone(&state)),
            connections: MockConnectionsClient::new(Arc::clone(&state)),
            state,
        }
    }

    /// Get the providers client.
    #[must_use]
    pub fn providers(&self) -> &MockProvidersClient {
        &self.providers
    }

    /// Get the accounts client.
    #[must_use]
    pub fn accounts(&self) -> &MockAccountsClient {
        &self.accounts
    }

    /// Get the members client.
    #[must_use]
    pub fn members(&self) -> &MockMembersClient {
        &self.members
    }

    /// Get the connected users client.
    #[must_use]
    pub fn connected_users(&self) -> &MockConnectedUsersClient {
        &self.connected_users
    }

    /// Get the connections client.
    #[must_use]
    pub fn connections(&self) -> &MockConnectionsClient {
        &self.connections
    }

    /// Check if a method was called.
    ///
    /// # Arguments
    ///
    /// * `method` - Method name (e.g., "members.get", "providers.list")
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .any(|call| call.method == method)
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match method {
            Some(m) => state.calls.iter().filter(|call| call.method == m).cloned().collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset all recorded calls.
    pub fn reset(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).calls.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccessLevel, Platform};

    #[test]
    fn test_mock_providers_get_default() {
        let mock = MockAwardWalletClient::new();
        let provider = mock.providers().get("aa").unwrap();

        assert_eq!(provider.code, "aa");
        assert!(mock.was_called("providers.get"));
        assert_eq!(mock.call_count("providers.get"), 1);
    }

    #[test]
    fn test_mock_providers_list_configured() {
        let mock = MockAwardWalletClient::new();
        mock.providers().configure_list(MockResponse::with_data(vec![ProviderInfo {
            code: "marriott".to_string(),
            display_name: "Marriott Bonvoy".to_string(),
            kind: ProviderKind::Hotel,
        }]));

        let providers = mock.providers().list().unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].kind, ProviderKind::Hotel);
    }

    #[test]
    fn test_mock_members_get_with_error() {
        let mock = MockAwardWalletClient::new();
        mock.members()
            .configure_get(MockResponse::with_error(404, "Member not found"));

        let err = mock.members().get(42).unwrap_err();
        match err {
            Error::Api(api) => {
                assert_eq!(api.status(), 404);
                assert!(matches!(api, ApiError::NotFound { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mock_accounts_get_default() {
        let mock = MockAwardWalletClient::new();
        let details = mock.accounts().get(7).unwrap();

        assert_eq!(details.account.len(), 1);
        assert_eq!(details.account[0].account_id, 7);
        assert!(details.member.is_none());
    }

    #[test]
    fn test_mock_connected_users_get() {
        let mock = MockAwardWalletClient::new();
        let user = mock.connected_users().get(1001).unwrap();

        assert_eq!(user.user_id, 1001);
        assert_eq!(
            mock.get_calls(Some("connected_users.get"))[0].args,
            vec!["1001".to_string()]
        );
    }

    #[test]
    fn test_mock_create_auth_url_records_request() {
        let mock = MockAwardWalletClient::new();
        let request = AuthUrlRequest::new(Platform::Mobile, AccessLevel::FullControl)
            .with_state("s1");

        let url = mock.connections().create_auth_url(&request).unwrap();
        assert!(url.url.contains("platform=mobile"));

        let calls = mock.get_calls(Some("connections.create_auth_url"));
        assert_eq!(calls[0].args[0], "mobile");
        assert_eq!(calls[0].args[1], "3");
    }

    #[test]
    fn test_mock_connection_info_rejects_empty_code() {
        let mock = MockAwardWalletClient::new();
        assert!(matches!(
            mock.connections().get_connection_info(" "),
            Err(Error::Validation(_))
        ));
        assert_eq!(mock.connections().get_connection_info("abc").unwrap().user_id, 1);
    }

    #[test]
    fn test_mock_get_calls() {
        let mock = MockAwardWalletClient::new();

        mock.members().list().unwrap();
        mock.members().get(1).unwrap();
        mock.members().get(2).unwrap();

        assert_eq!(mock.get_calls(None).len(), 3);
        assert_eq!(mock.get_calls(Some("members.get")).len(), 2);
        assert_eq!(mock.get_calls(Some("members.list")).len(), 1);
    }

    #[test]
    fn test_mock_reset() {
        let mock = MockAwardWalletClient::new();

        mock.providers().list().unwrap();
        assert_eq!(mock.call_count("providers.list"), 1);

        mock.reset();
        assert_eq!(mock.call_count("providers.list"), 0);
        assert!(!mock.was_called("providers.list"));
    }
}
