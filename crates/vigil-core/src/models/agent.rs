//! Security agents and their supporting documents.

use serde::{Deserialize, Serialize};

use super::reference::{Commune, Specialisation};

/// Approval state of an agent profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Pending,
    Approved,
    Rejected,
}

/// Approval state of an uploaded document or certification.
pub type ReviewStatus = AgentStatus;

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Pending => "pending",
            AgentStatus::Approved => "approved",
            AgentStatus::Rejected => "rejected",
        }
    }
}

/// Kind of identity or background document attached to an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Criminal record extract. The wire name keeps the server's spelling.
    CasierJudiciare,
    Cni,
    Permis,
    Diplome,
    Autre,
}

impl DocumentType {
    /// Wire name, as sent in multipart form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::CasierJudiciare => "CASIER_JUDICIARE",
            DocumentType::Cni => "CNI",
            DocumentType::Permis => "PERMIS",
            DocumentType::Diplome => "DIPLOME",
            DocumentType::Autre => "AUTRE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub slug: String,
    pub user: AgentUser,
    #[serde(default)]
    pub commune: Option<Commune>,
    #[serde(default)]
    pub hour_price: f64,
    #[serde(default)]
    pub daily_price: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub missions_count: u32,
    #[serde(default)]
    pub completed_missions_count: u32,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub average_rating: f64,
    pub status: AgentStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub rejected_at: Option<String>,
    #[serde(default)]
    pub certifications: Vec<AgentCertification>,
    #[serde(default)]
    pub specialisations: Vec<Specialisation>,
    #[serde(default)]
    pub documents: Vec<AgentDocument>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCertification {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub certification_number: Option<String>,
    #[serde(default)]
    pub certification_date: Option<String>,
    #[serde(default)]
    pub certification_file_url: Option<String>,
    #[serde(default)]
    pub status: Option<ReviewStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDocument {
    pub id: String,
    pub document_type: DocumentType,
    pub document_url: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub status: Option<ReviewStatus>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Partial agent update for `PUT /agents/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAgent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commune_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
