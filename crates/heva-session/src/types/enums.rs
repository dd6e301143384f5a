/*
[INPUT]:  HEVA API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new choice values are added
*/

use serde::{Deserialize, Serialize};

/// Role of a platform user, as carried in `user_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Creative,
    #[serde(alias = "agent")]
    FieldAgent,
    Admin,
    HevaTeam,
}

impl UserType {
    pub fn is_admin(self) -> bool {
        matches!(self, UserType::Admin | UserType::HevaTeam)
    }

    pub fn is_agent(self) -> bool {
        self == UserType::FieldAgent
    }

    pub fn is_creative(self) -> bool {
        self == UserType::Creative
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Creative => "creative",
            UserType::FieldAgent => "field_agent",
            UserType::Admin => "admin",
            UserType::HevaTeam => "heva_team",
        }
    }
}

/// Role a protected view can demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredRole {
    Admin,
    Agent,
    Creative,
}

impl RequiredRole {
    /// Whether a user of the given type satisfies this role
    pub fn is_satisfied_by(self, user_type: UserType) -> bool {
        match self {
            RequiredRole::Admin => user_type.is_admin(),
            RequiredRole::Agent => user_type.is_agent(),
            RequiredRole::Creative => user_type.is_creative(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[serde(alias = "non-binary")]
    NonBinary,
    #[default]
    PreferNotToSay,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryDevice {
    #[default]
    Smartphone,
    FeaturePhone,
    Tablet,
    Computer,
    SharedDevice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteracyLevel {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeMedium {
    #[default]
    Digital,
    Traditional,
    Mixed,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldExperience {
    #[default]
    #[serde(rename = "0-1")]
    UpToOneYear,
    #[serde(rename = "2-5")]
    TwoToFiveYears,
    #[serde(rename = "6-10")]
    SixToTenYears,
    #[serde(rename = "10+")]
    OverTenYears,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    #[default]
    Standard,
    Elevated,
    Admin,
    SuperAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
    Funding,
    Other,
}
