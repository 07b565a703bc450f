//! Models for the user connection flow.
//!
//! A business asks a user to connect by sending them an authorization URL;
//! after approval the user is redirected back with a code that resolves to
//! the connected user's id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Level of account access to be granted by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccessLevel {
    ReadNumbersAndStatus = 0,
    #[default]
    ReadBalancesAndStatus = 1,
    ReadAllExceptPasswords = 2,
    FullControl = 3,
}

impl AccessLevel {
    /// Integer code used on the wire.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AccessLevel {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::ReadNumbersAndStatus),
            1 => Ok(Self::ReadBalancesAndStatus),
            2 => Ok(Self::ReadAllExceptPasswords),
            3 => Ok(Self::FullControl),
            _ => Err(format!("unknown access level: {code}")),
        }
    }
}

impl From<AccessLevel> for u8 {
    fn from(level: AccessLevel) -> Self {
        level.code()
    }
}

/// Platform the authorization page is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Body of a create-auth-url request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlRequest {
    pub platform: Platform,
    pub access_level: AccessLevel,
    /// Opaque value echoed back on the redirect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Let the user pick which accounts to share
    pub granular_sharing: bool,
}

impl AuthUrlRequest {
    #[must_use]
    pub fn new(platform: Platform, access_level: AccessLevel) -> Self {
        Self {
            platform,
            access_level,
            state: None,
            granular_sharing: false,
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn with_granular_sharing(mut self, granular_sharing: bool) -> Self {
        self.granular_sharing = granular_sharing;
        self
    }
}

/// Authorization URL to send to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUrl {
    pub url: String,
}

/// Result of resolving a connection code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_url_request_serialize() {
        let request = AuthUrlRequest::new(Platform::Mobile, AccessLevel::FullControl)
            .with_state("xyz")
            .with_granular_sharing(true);

        let value = serde_json::to_value(&request).expect("Should serialize");
        assert_eq!(
            value,
            json!({
                "platform": "mobile",
                "accessLevel": 3,
                "state": "xyz",
                "granularSharing": true
            })
        );
    }

    #[test]
    fn test_auth_url_request_omits_missing_state() {
        let value = serde_json::to_value(AuthUrlRequest::default()).expect("Should serialize");
        assert!(value.get("state").is_none());
        assert_eq!(value["accessLevel"], json!(1));
        assert_eq!(value["platform"], json!("desktop"));
    }

    #[test]
    fn test_access_level_codes() {
        assert_eq!(AccessLevel::try_from(2), Ok(AccessLevel::ReadAllExceptPasswords));
        assert!(AccessLevel::try_from(4).is_err());

        let parsed: Result<AccessLevel, _> = serde_json::from_value(json!(7));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("Mobile".parse::<Platform>(), Ok(Platform::Mobile));
        assert!("tablet".parse::<Platform>().is_err());
    }

    #[test]
    fn test_connection_info_deserialize() {
        let info: ConnectionInfo =
            serde_json::from_value(json!({"userId": 123_456})).expect("Should deserialize");
        assert_eq!(info.user_id, 123_456);
    }
}
