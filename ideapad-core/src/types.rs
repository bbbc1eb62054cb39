use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed origin tags attached to every primary webhook payload.
pub const SOURCE_TAG: &str = "LinkedIn Idea Pad";
pub const PLATFORM_TAG: &str = "LinkedIn";

/// A persisted post-idea entry. Immutable once created; the only mutation
/// the repository supports afterwards is deletion.
///
/// Unset optional fields are stored as empty strings, and the same policy
/// applies to outbound payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub draft_text: String,
    pub profile: String,
    #[serde(default)]
    pub post_goal: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub segment: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub preferred_format: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub notes: String,
}

/// The in-progress counterpart of [`IdeaRecord`], owned by the form state
/// model. No identity or timestamp until the repository accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaDraft {
    pub draft_text: String,
    pub profile: String,
    pub post_goal: String,
    pub tone: String,
    pub target_audience: String,
    pub segment: String,
    pub theme: String,
    pub preferred_format: String,
    pub keywords: String,
    pub notes: String,
}

/// Response body of the field-population helper endpoint. Every key is
/// optional; present keys overwrite the matching draft field (subject to
/// the form model's dependent-field rules), absent keys leave it
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DraftSuggestions {
    pub goal: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub segment: Option<String>,
    pub theme: Option<String>,
    pub creative_format: Option<String>,
    pub keywords: Option<String>,
    pub additional_notes: Option<String>,
}
