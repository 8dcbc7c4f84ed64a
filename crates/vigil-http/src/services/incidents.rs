//! Incident reports raised in communities.

use vigil_core::models::{Incident, IncidentActivity, IncidentFilters, IncidentStatus};
use vigil_core::{PaginatedResponse, Result};

use crate::client::ApiClient;
use crate::endpoints::{StatusRequest, incidents};
use crate::request::ApiRequest;

#[derive(Debug, Clone, Copy)]
pub struct IncidentsService<'a> {
    client: &'a ApiClient,
}

impl<'a> IncidentsService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &IncidentFilters) -> Result<PaginatedResponse<Incident>> {
        self.client
            .page(ApiRequest::get(incidents::LIST).query(filters)?)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Incident> {
        self.client.get(&incidents::by_id(id)).await
    }

    pub async fn by_community(
        &self,
        community_id: &str,
        filters: &IncidentFilters,
    ) -> Result<PaginatedResponse<Incident>> {
        self.client
            .page(ApiRequest::get(incidents::by_community(community_id)).query(filters)?)
            .await
    }

    pub async fn update_status(&self, id: &str, status: IncidentStatus) -> Result<Incident> {
        self.client
            .patch(&incidents::status(id), &StatusRequest { status })
            .await
    }

    /// Timeline of comments, confirmations and status changes.
    pub async fn activities(&self, id: &str) -> Result<Vec<IncidentActivity>> {
        self.client.get(&incidents::activities(id)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&incidents::by_id(id)).await
    }

    pub fn photo_url(&self, incident_id: &str, photo_id: &str) -> String {
        self.client.url(&incidents::photo(incident_id, photo_id))
    }
}
