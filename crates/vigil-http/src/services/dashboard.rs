//! Back-office dashboard statistics.

use vigil_core::Result;
use vigil_core::models::{
    AgentsStats, CommunitiesStats, DashboardStats, IncidentsStats, MissionsStats, PaymentsStats,
    RecentActivity,
};

use crate::client::ApiClient;
use crate::endpoints::{LimitParams, dashboard};
use crate::request::ApiRequest;

#[derive(Debug, Clone, Copy)]
pub struct DashboardService<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        self.client.get(dashboard::STATS).await
    }

    pub async fn agents_stats(&self) -> Result<AgentsStats> {
        self.client.get(dashboard::AGENTS).await
    }

    pub async fn missions_stats(&self) -> Result<MissionsStats> {
        self.client.get(dashboard::MISSIONS).await
    }

    pub async fn payments_stats(&self) -> Result<PaymentsStats> {
        self.client.get(dashboard::PAYMENTS).await
    }

    pub async fn incidents_stats(&self) -> Result<IncidentsStats> {
        self.client.get(dashboard::INCIDENTS).await
    }

    pub async fn communities_stats(&self) -> Result<CommunitiesStats> {
        self.client.get(dashboard::COMMUNITIES).await
    }

    /// Latest activity feed; the server picks the length when `limit` is `None`.
    pub async fn recent_activity(&self, limit: Option<u32>) -> Result<Vec<RecentActivity>> {
        self.client
            .data(ApiRequest::get(dashboard::RECENT_ACTIVITY).query(&LimitParams { limit })?)
            .await
    }
}
