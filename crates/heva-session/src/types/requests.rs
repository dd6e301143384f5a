/*
[INPUT]:  HEVA API schema definitions and serde requirements
[OUTPUT]: Typed Rust request bodies with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new request types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{
    AccessLevel, CreativeMedium, EntryType, ExperienceLevel, FieldExperience, Gender,
    LiteracyLevel, PrimaryDevice, UserType,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register/`.
///
/// Built from a validated [`crate::auth::RegistrationForm`]; the role
/// extension is flattened so the wire object carries `user_type` next to
/// the common fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub gender: Gender,
    pub disability: bool,
    pub disability_type: String,
    pub marginalized_groups: Vec<String>,
    pub primary_device: PrimaryDevice,
    pub literacy_level: LiteracyLevel,
    pub consent_data_collection: bool,
    pub consent_contact: bool,
    #[serde(flatten)]
    pub role: RoleDetails,
}

impl RegistrationPayload {
    pub fn user_type(&self) -> UserType {
        self.role.user_type()
    }
}

/// Role-specific registration fields, tagged by `user_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "user_type", rename_all = "snake_case")]
pub enum RoleDetails {
    Creative(CreativeDetails),
    FieldAgent(FieldAgentDetails),
    Admin(AdminDetails),
}

impl RoleDetails {
    pub fn user_type(&self) -> UserType {
        match self {
            RoleDetails::Creative(_) => UserType::Creative,
            RoleDetails::FieldAgent(_) => UserType::FieldAgent,
            RoleDetails::Admin(_) => UserType::Admin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreativeDetails {
    pub creative_skills: String,
    pub portfolio_url: String,
    pub experience_level: ExperienceLevel,
    pub preferred_medium: CreativeMedium,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAgentDetails {
    pub region: String,
    pub organization: String,
    pub experience_years: FieldExperience,
    pub languages: String,
    pub specializations: String,
    pub supervisor_name: String,
    pub supervisor_contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDetails {
    pub organization: String,
    pub department: String,
    pub role: String,
    pub access_level: AccessLevel,
    pub emergency_contact: String,
    pub security_clearance: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStory {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFinancialEntry {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub entry_type: EntryType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
}
