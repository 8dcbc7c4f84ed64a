//! Incidents reported inside communities.

use serde::{Deserialize, Serialize};

use super::community::Community;
use super::reference::TypeIncident;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    Confirmed,
    InProgress,
    Resolved,
    Closed,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Confirmed => "confirmed",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub type_incident: Option<TypeIncident>,
    #[serde(default)]
    pub community: Option<Community>,
    #[serde(default)]
    pub reported_by: Option<User>,
    #[serde(default)]
    pub is_anonymous: bool,
    pub urgency_level: UrgencyLevel,
    pub status: IncidentStatus,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub photos: Vec<IncidentPhoto>,
    #[serde(default)]
    pub confirmations_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentPhoto {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Report,
    Confirmation,
    Comment,
    StatusChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub old_status: Option<IncidentStatus>,
    #[serde(default)]
    pub new_status: Option<IncidentStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}
