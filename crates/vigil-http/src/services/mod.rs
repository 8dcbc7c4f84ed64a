//! Resource facades: typed calls translated to HTTP verbs, envelopes unwrapped.

mod agents;
mod auth;
mod communities;
mod dashboard;
mod incidents;
mod missions;
mod reference;
mod users;

pub use agents::{
    AgentsService, NewAgent, NewAgentCertification, NewAgentDocument, NewAgentSpecialisation,
    Upload,
};
pub use auth::AuthService;
pub use communities::CommunitiesService;
pub use dashboard::DashboardService;
pub use incidents::IncidentsService;
pub use missions::MissionsService;
pub use reference::{ReferenceService, ReferenceTable};
pub use users::UsersService;
