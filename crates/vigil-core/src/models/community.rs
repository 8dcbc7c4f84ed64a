//! Neighbourhood vigilance communities.

use serde::{Deserialize, Serialize};

use super::reference::Commune;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunityRole {
    Admin,
    Moderator,
    Member,
}

impl CommunityRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunityRole::Admin => "admin",
            CommunityRole::Moderator => "moderator",
            CommunityRole::Member => "member",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Pending,
    Approved,
    Rejected,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Pending => "pending",
            MemberStatus::Approved => "approved",
            MemberStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub commune: Option<Commune>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub incidents_count: u32,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityMember {
    pub id: String,
    pub user: User,
    pub role: CommunityRole,
    pub status: MemberStatus,
    #[serde(default)]
    pub joined_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub members_count: u32,
    pub incidents_count: u32,
    pub active_incidents: u32,
}

/// Body for `POST /communautes`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCommunity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub commune_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Partial community update for `PUT /communautes/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommunity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commune_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
