/*
[INPUT]:  HEVA API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for users, stories, ledger entries and analytics
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{EntryType, Gender, StoryStatus, UserType};

const DEMO_EMAIL: &str = "demo@example.com";

/// Authenticated principal as returned by the auth endpoints.
///
/// The backend may send more fields than listed here; unknown fields are
/// ignored and missing optional ones fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub disability: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disability_type: Option<String>,
    #[serde(default)]
    pub marginalized_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literacy_level: Option<String>,
    #[serde(default)]
    pub consent_data_collection: bool,
    #[serde(default)]
    pub consent_contact: bool,
}

impl UserProfile {
    /// Profile handed out by the offline demo session
    pub fn demo(email: &str) -> Self {
        let email = if email.trim().is_empty() {
            DEMO_EMAIL.to_string()
        } else {
            email.to_string()
        };

        Self {
            id: None,
            username: email.clone(),
            email,
            full_name: "Demo User".to_string(),
            user_type: UserType::Creative,
            gender: Gender::PreferNotToSay,
            disability: false,
            disability_type: None,
            marginalized_groups: Vec::new(),
            primary_identity: Some("creative".to_string()),
            primary_device: None,
            literacy_level: None,
            consent_data_collection: false,
            consent_contact: false,
        }
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else if !self.username.is_empty() {
            &self.username
        } else {
            &self.email
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: StoryStatus,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default, alias = "date_submitted")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub entry_type: EntryType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub source: String,
}

/// Per-user aggregate metrics. The shape is owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAnalytics(pub serde_json::Value);

/// Platform-wide dashboard metrics, grouped in named sections such as
/// `user_demographics` or `financial_analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardAnalytics(pub serde_json::Value);

impl DashboardAnalytics {
    pub fn section(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }
}
