//! Business member data models.

use serde::{Deserialize, Serialize};

use super::accounts::{Account, AccountsIndexItem};

/// A member of the business account, with an index of their accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListItem {
    pub member_id: i64,
    pub full_name: String,
    pub edit_member_url: String,
    pub account_list_url: String,
    pub timeline_url: String,
    pub accounts_index: Vec<AccountsIndexItem>,
    pub email: Option<String>,
    pub forwarding_email: Option<String>,
}

/// Full details of a single member, including all their accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetails {
    pub member_id: i64,
    pub full_name: String,
    pub edit_member_url: String,
    pub account_list_url: String,
    pub timeline_url: String,
    pub email: Option<String>,
    pub forwarding_email: Option<String>,
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_list_item_deserialize() {
        let json = r#"{
            "memberId": 42,
            "fullName": "Jane Traveler",
            "email": "jane@example.com",
            "forwardingEmail": "jane.t@awardwallet.com",
            "editMemberUrl": "https://business.awardwallet.com/members/edit/42",
            "accountListUrl": "https://business.awardwallet.com/account/list?agentId=42",
            "timelineUrl": "https://business.awardwallet.com/timeline/?agentId=42",
            "accountsIndex": [
                {"accountId": 1, "lastChangeDate": "2024-01-01T00:00:00+00:00", "lastRetrieveDate": "2024-01-02T00:00:00+00:00"},
                {"accountId": 2, "lastChangeDate": "2024-02-01T00:00:00+00:00"}
            ]
        }"#;

        let member: MemberListItem = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(member.member_id, 42);
        assert_eq!(member.accounts_index.len(), 2);
        assert!(member.accounts_index[1].last_retrieve_date.is_none());
        assert_eq!(member.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_member_details_ignores_accounts_index() {
        let json = r#"{
            "memberId": 42,
            "fullName": "Jane Traveler",
            "editMemberUrl": "e",
            "accountListUrl": "a",
            "timelineUrl": "t",
            "accountsIndex": [{"accountId": 1, "lastChangeDate": "2024-01-01T00:00:00+00:00"}],
            "accounts": []
        }"#;

        let member: MemberDetails = serde_json::from_str(json).expect("Should deserialize");
        assert!(member.accounts.is_empty());
        assert!(member.email.is_none());

        let round = serde_json::to_value(&member).expect("Should serialize");
        assert!(round.get("accountsIndex").is_none());
    }
}
