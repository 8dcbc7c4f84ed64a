//! Dashboard statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub users: UserTotals,
    pub agents: AgentTotals,
    pub missions: MissionTotals,
    pub communities: CommunityTotals,
    pub incidents: IncidentTotals,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTotals {
    pub total: u64,
    pub active: u64,
    pub new_this_month: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTotals {
    pub total: u64,
    pub active: u64,
    pub available: u64,
    pub pending_approval: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionTotals {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub revenue_total: f64,
    pub revenue_this_month: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityTotals {
    pub total: u64,
    pub active: u64,
    pub total_members: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentTotals {
    pub total: u64,
    pub open: u64,
    pub resolved: u64,
    pub critical: u64,
}

/// Counts keyed by a status, method or urgency name.
pub type StatusBreakdown = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuneCount {
    pub commune: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMissions {
    pub month: String,
    pub count: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentsStats {
    pub total: u64,
    pub by_status: StatusBreakdown,
    #[serde(default)]
    pub by_commune: Vec<CommuneCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionsStats {
    pub total: u64,
    pub by_status: StatusBreakdown,
    #[serde(default)]
    pub by_month: Vec<MonthlyMissions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsStats {
    pub total_amount: f64,
    pub by_status: StatusBreakdown,
    pub by_method: StatusBreakdown,
    #[serde(default)]
    pub by_month: Vec<MonthlyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentsStats {
    pub total: u64,
    pub by_status: StatusBreakdown,
    pub by_urgency: StatusBreakdown,
    #[serde(default)]
    pub by_type: Vec<TypeCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunitiesStats {
    pub total: u64,
    pub total_members: u64,
    #[serde(default)]
    pub by_commune: Vec<CommuneCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    UserRegistered,
    AgentApproved,
    MissionCreated,
    IncidentReported,
    PaymentReceived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}
