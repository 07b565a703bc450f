//! Data model types for the `AwardWallet` Business API.

pub mod accounts;
pub mod connected_users;
pub mod connections;
pub mod members;
pub mod providers;
pub mod timestamp;

// Re-exports
pub use accounts::{
    Account, AccountDetails, AccountProperty, AccountsIndexItem, HistoryField, HistoryItem,
    SubAccount,
};
pub use connected_users::{ConnectedUserDetails, ConnectedUserListItem};
pub use connections::{AccessLevel, AuthUrl, AuthUrlRequest, ConnectionInfo, Platform};
pub use members::{MemberDetails, MemberListItem};
pub use providers::{
    ProviderDetails, ProviderInfo, ProviderInputField, ProviderKind, ProviderPropertyInfo,
};
