//! Loyalty account data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::connected_users::ConnectedUserListItem;
use super::members::MemberListItem;
use super::timestamp;

/// A secondary attribute of a loyalty account (status level, expiring points, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProperty {
    pub name: String,
    pub value: String,
    pub rank: Option<i32>,
    pub kind: Option<i32>,
}

/// A single field within a transaction history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryField {
    pub code: String,
    pub name: String,
    pub value: String,
}

/// A single transaction history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub fields: Option<Vec<HistoryField>>,
}

impl HistoryItem {
    /// Look up a field value by its code.
    #[must_use]
    pub fn field(&self, code: &str) -> Option<&str> {
        self.fields
            .as_deref()?
            .iter()
            .find(|f| f.code == code)
            .map(|f| f.value.as_str())
    }
}

/// A sub-account, like an individual card under a bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccount {
    pub sub_account_id: i64,
    pub display_name: String,
    /// Formatted balance
    pub balance: String,
    pub balance_raw: Option<f64>,
    pub last_detected_change: Option<String>,
    pub properties: Option<Vec<AccountProperty>>,
    pub history: Option<Vec<HistoryItem>>,
}

/// A loyalty account with all its details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: i64,
    /// Provider code
    pub code: String,
    pub display_name: String,
    pub kind: String,
    pub login: String,
    pub autologin_url: String,
    pub update_url: String,
    pub edit_url: String,
    /// Formatted balance
    pub balance: String,
    pub balance_raw: f64,
    pub owner: String,
    /// Last update status; 1 means the last check succeeded
    pub error_code: i32,
    pub last_detected_change: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub last_retrieve_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub last_change_date: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub properties: Option<Vec<AccountProperty>>,
    pub history: Option<Vec<HistoryItem>>,
    pub sub_accounts: Option<Vec<SubAccount>>,
}

impl Account {
    /// Look up a property value by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .as_deref()?
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Lightweight reference to an account, used in list views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsIndexItem {
    pub account_id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub last_change_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub last_retrieve_date: Option<DateTime<Utc>>,
}

/// Account details response, with the member or connected user owning it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub account: Vec<Account>,
    pub member: Option<MemberListItem>,
    pub connected_user: Option<ConnectedUserListItem>,
}
