//! Loyalty provider data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a loyalty provider.
///
/// Serialized as its integer code; code 11 is unassigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ProviderKind {
    Airline = 1,
    Hotel = 2,
    CarRental = 3,
    Train = 4,
    #[default]
    Other = 5,
    CreditCard = 6,
    Shopping = 7,
    Dining = 8,
    Survey = 9,
    CruiseLine = 10,
    Parking = 12,
}

impl ProviderKind {
    /// All kinds, in code order.
    pub const ALL: [Self; 11] = [
        Self::Airline,
        Self::Hotel,
        Self::CarRental,
        Self::Train,
        Self::Other,
        Self::CreditCard,
        Self::Shopping,
        Self::Dining,
        Self::Survey,
        Self::CruiseLine,
        Self::Parking,
    ];

    /// Integer code used on the wire.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Airline => "Airline",
            Self::Hotel => "Hotel",
            Self::CarRental => "Car rental",
            Self::Train => "Train",
            Self::Other => "Other",
            Self::CreditCard => "Credit card",
            Self::Shopping => "Shopping",
            Self::Dining => "Dining",
            Self::Survey => "Survey",
            Self::CruiseLine => "Cruise line",
            Self::Parking => "Parking",
        }
    }
}

impl TryFrom<u8> for ProviderKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| format!("unknown provider kind: {code}"))
    }
}

impl From<ProviderKind> for u8 {
    fn from(kind: ProviderKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entry of the supported provider list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    /// Provider code (e.g. "aa", "marriott")
    pub code: String,
    /// Display name
    pub display_name: String,
    /// Provider category
    pub kind: ProviderKind,
}

/// An input a user must supply for a provider (login, password, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInputField {
    pub code: Option<String>,
    pub title: Option<String>,
    pub required: Option<bool>,
    pub default_value: Option<String>,
}

/// A property or history column reported by a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPropertyInfo {
    pub code: Option<String>,
    pub name: Option<String>,
    /// Property type; a string here, unlike `ProviderKind`
    pub kind: Option<String>,
}

/// Detailed information about a single provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDetails {
    pub kind: ProviderKind,
    pub code: String,
    pub display_name: String,
    pub provider_name: Option<String>,
    pub program_name: Option<String>,
    pub login: Option<ProviderInputField>,
    pub login2: Option<ProviderInputField>,
    pub login3: Option<ProviderInputField>,
    pub password: Option<ProviderInputField>,
    pub properties: Option<Vec<ProviderPropertyInfo>>,
    pub history_columns: Option<Vec<ProviderPropertyInfo>>,
    pub auto_login: Option<bool>,
    pub can_parse_history: Option<bool>,
    pub can_check_itinerary: Option<bool>,
    pub can_check_confirmation: Option<bool>,
}
