//! Connected user data models.
//!
//! A connected user is an `AwardWallet` personal account that shared its
//! loyalty accounts with the business.

use serde::{Deserialize, Serialize};

use super::accounts::{Account, AccountsIndexItem};

/// A connected user in a list view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedUserListItem {
    pub user_id: i64,
    pub full_name: String,
    pub status: String,
    pub user_name: String,
    pub email: String,
    pub forwarding_email: String,
    pub connection_type: String,
    pub accounts_access_level: String,
    pub accounts_shared_by_default: bool,
    pub edit_connection_url: String,
    pub account_list_url: String,
    pub timeline_url: String,
    pub accounts_index: Vec<AccountsIndexItem>,
    pub access_level: Option<String>,
    pub booking_requests_url: Option<String>,
}

/// Full details of a connected user, including the accounts they share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedUserDetails {
    pub user_id: i64,
    pub full_name: String,
    pub status: String,
    pub user_name: String,
    pub email: String,
    pub forwarding_email: String,
    pub connection_type: String,
    pub accounts_access_level: String,
    pub accounts_shared_by_default: bool,
    pub edit_connection_url: String,
    pub account_list_url: String,
    pub timeline_url: String,
    pub access_level: Option<String>,
    pub booking_requests_url: Option<String>,
    pub accounts: Vec<Account>,
}
