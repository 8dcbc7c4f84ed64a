//! Missions: booking, lifecycle transitions and assignment.

use vigil_core::models::{Mission, MissionFilters, MissionStatus, NewMission, UpdateMission};
use vigil_core::{PaginatedResponse, Result};

use crate::client::ApiClient;
use crate::endpoints::{AssignRequest, CancellationRequest, StatusRequest, missions};
use crate::request::ApiRequest;

#[derive(Debug, Clone, Copy)]
pub struct MissionsService<'a> {
    client: &'a ApiClient,
}

impl<'a> MissionsService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    async fn list_at(
        &self,
        path: &str,
        filters: &MissionFilters,
    ) -> Result<PaginatedResponse<Mission>> {
        self.client
            .page(ApiRequest::get(path).query(filters)?)
            .await
    }

    async fn transition(&self, path: String) -> Result<Mission> {
        self.client.data(ApiRequest::patch(path)).await
    }

    pub async fn list(&self, filters: &MissionFilters) -> Result<PaginatedResponse<Mission>> {
        self.list_at(missions::LIST, filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Mission> {
        self.client.get(&missions::by_id(id)).await
    }

    pub async fn create(&self, mission: &NewMission) -> Result<Mission> {
        self.client.post(missions::LIST, mission).await
    }

    pub async fn update(&self, id: &str, update: &UpdateMission) -> Result<Mission> {
        self.client.put(&missions::by_id(id), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&missions::by_id(id)).await
    }

    pub async fn cancel(&self, id: &str, reason: &str) -> Result<Mission> {
        self.client
            .patch(
                &missions::cancel(id),
                &CancellationRequest {
                    cancellation_reason: reason,
                },
            )
            .await
    }

    pub async fn accept(&self, id: &str) -> Result<Mission> {
        self.transition(missions::accept(id)).await
    }

    pub async fn start(&self, id: &str) -> Result<Mission> {
        self.transition(missions::start(id)).await
    }

    pub async fn complete(&self, id: &str) -> Result<Mission> {
        self.transition(missions::complete(id)).await
    }

    /// Assign an agent to a mission.
    pub async fn assign(&self, id: &str, agent_id: &str) -> Result<Mission> {
        self.client
            .patch(&missions::assign(id), &AssignRequest { agent_id })
            .await
    }

    pub async fn update_status(&self, id: &str, status: MissionStatus) -> Result<Mission> {
        self.client
            .patch(&missions::status(id), &StatusRequest { status })
            .await
    }

    /// Missions booked by the logged-in client.
    pub async fn my_missions(&self, filters: &MissionFilters) -> Result<PaginatedResponse<Mission>> {
        self.list_at(missions::MY, filters).await
    }

    pub async fn my_history(&self, filters: &MissionFilters) -> Result<PaginatedResponse<Mission>> {
        self.list_at(missions::MY_HISTORY, filters).await
    }

    /// Missions assigned to the logged-in agent.
    pub async fn agent_missions(
        &self,
        filters: &MissionFilters,
    ) -> Result<PaginatedResponse<Mission>> {
        self.list_at(missions::AGENT, filters).await
    }
}
