//! Domain payloads exchanged with the back-office API.
//!
//! These mirror the server's JSON. Optional fields the server may omit are
//! `Option` with `#[serde(default)]`.

mod agent;
mod community;
mod dashboard;
mod filters;
mod incident;
mod mission;
mod reference;
mod user;

pub use agent::{
    Agent, AgentCertification, AgentDocument, AgentStatus, AgentUser, DocumentType, ReviewStatus,
    UpdateAgent,
};
pub use community::{
    Community, CommunityMember, CommunityRole, CommunityStats, MemberStatus, NewCommunity,
    UpdateCommunity,
};
pub use dashboard::{
    ActivityType, AgentTotals, AgentsStats, CommuneCount, CommunitiesStats, CommunityTotals,
    DashboardStats, IncidentTotals, IncidentsStats, MissionTotals, MissionsStats, MonthlyAmount,
    MonthlyMissions, PaymentsStats, RecentActivity, StatusBreakdown, TypeCount, UserTotals,
};
pub use filters::{
    AgentFilters, CommunityFilters, IncidentFilters, MissionFilters, PaginationParams,
    SortOrder, UserFilters, UserSelectParams,
};
pub use incident::{
    ActivityKind, Incident, IncidentActivity, IncidentPhoto, IncidentStatus, UrgencyLevel,
};
pub use mission::{Mission, MissionStatus, NewMission, UpdateMission};
pub use reference::{
    Certification, Commune, Equipement, ReferenceDocumentType, SousTypeMission, Specialisation,
    TypeIncident, TypeMission,
};
pub use user::{ChangePassword, Permission, Role, UpdateUser, User, UserSelectOption};
