//! Tool listing model and related types.
//!
//! Structures are aligned with the backend `tools` table row shape. The
//! backend assigns ids and timestamps; every other field is written as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Physical condition of a listed tool. Stored lowercase in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "needs-repair")]
    NeedsRepair,
}

impl Condition {
    /// Return the stored string code for this condition
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::NeedsRepair => "needs-repair",
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "needs-repair" => Ok(Condition::NeedsRepair),
            _ => Err(format!("Invalid condition: {}", s)),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ToolListing
// ---------------------------------------------------------------------------

/// Full tool listing as stored by the backend.
/// Immutable once fetched; the store only ever appends new records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolListing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Open vocabulary, derived from data rather than a fixed enum
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner: String,
    /// Free-form address text, e.g. "Downtown Seattle, WA"
    pub location: String,
    /// Free-text availability description, not a structured calendar
    pub availability: String,
    pub condition: Condition,
    /// Currency units per day
    pub price: f64,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create listing request. The backend assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewListing {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner: String,
    pub location: String,
    pub availability: String,
    pub condition: Condition,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(email(message = "Invalid email format"))]
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}
