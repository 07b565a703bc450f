//! `AwardWallet` Business API client for Rust
//!
//! Typed access to the `AwardWallet` Business API: the loyalty provider
//! catalogue, members and connected users of a business, their loyalty
//! accounts, and the flow that connects new users.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use awardwallet::{AccessLevel, AuthUrlRequest, AwardWalletClient, Platform};
//!
//! # async fn run() -> Result<(), awardwallet::Error> {
//! let client = AwardWalletClient::from_env()?;
//!
//! let details = client.accounts().get(7_654_321).await?;
//! for account in &details.account {
//!     println!("{}: {}", account.display_name, account.balance);
//! }
//!
//! let invite = client
//!     .connections()
//!     .create_auth_url(&AuthUrlRequest::new(Platform::Desktop, AccessLevel::ReadBalancesAndStatus))
//!     .await?;
//! println!("send this to the user: {}", invite.url);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod clients;
pub mod error;
pub mod logging;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use client::AwardWalletClient;
pub use clients::{
    AccountsClient, ConnectedUsersClient, ConnectionsClient, MembersClient, ProvidersClient,
};
pub use error::{ApiError, Error};
pub use transport::{HttpTransport, RetryConfig};
pub use types::{
    AccessLevel, Account, AccountDetails, AccountProperty, AccountsIndexItem, AuthUrl,
    AuthUrlRequest, ConnectedUserDetails, ConnectedUserListItem, ConnectionInfo, HistoryField,
    HistoryItem, MemberDetails, MemberListItem, Platform, ProviderDetails, ProviderInfo,
    ProviderInputField, ProviderKind, ProviderPropertyInfo, SubAccount,
};

/// Crate version, as released.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
