//! Guarding missions booked by clients and carried out by agents.

use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::reference::{Commune, Equipement, SousTypeMission, TypeMission};
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Pending => "pending",
            MissionStatus::Accepted => "accepted",
            MissionStatus::InProgress => "in_progress",
            MissionStatus::Completed => "completed",
            MissionStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub reference: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client: Option<User>,
    #[serde(default)]
    pub agent: Option<Box<Agent>>,
    #[serde(default)]
    pub type_mission: Option<TypeMission>,
    #[serde(default)]
    pub sous_type_mission: Option<SousTypeMission>,
    #[serde(default)]
    pub equipements: Vec<Equipement>,
    #[serde(default)]
    pub commune: Option<Commune>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub heure_debut: Option<String>,
    #[serde(default)]
    pub heure_fin: Option<String>,
    #[serde(default)]
    pub duration_hours: f64,
    #[serde(default)]
    pub hour_price: f64,
    #[serde(default)]
    pub total_amount: f64,
    pub status: MissionStatus,
    #[serde(default)]
    pub cancelled_at: Option<String>,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /missions`.
#[derive(Debug, Clone, Serialize)]
pub struct NewMission {
    pub agent_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub type_mission_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sous_type_mission_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub equipement_ids: Vec<String>,
    pub commune_id: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub start_date: String,
    pub heure_debut: String,
    pub duration_hours: f64,
    pub hour_price: f64,
}

/// Partial mission update for `PUT /missions/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heure_debut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_price: Option<f64>,
}
