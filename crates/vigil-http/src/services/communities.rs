//! Vigilance communities and their members.

use vigil_core::models::{
    Community, CommunityFilters, CommunityMember, CommunityRole, CommunityStats, NewCommunity,
    PaginationParams, UpdateCommunity,
};
use vigil_core::{PaginatedResponse, Result};

use crate::client::ApiClient;
use crate::endpoints::{RoleRequest, communities};
use crate::request::ApiRequest;

#[derive(Debug, Clone, Copy)]
pub struct CommunitiesService<'a> {
    client: &'a ApiClient,
}

impl<'a> CommunitiesService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &CommunityFilters) -> Result<PaginatedResponse<Community>> {
        self.client
            .page(ApiRequest::get(communities::LIST).query(filters)?)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Community> {
        self.client.get(&communities::by_id(id)).await
    }

    pub async fn create(&self, community: &NewCommunity) -> Result<Community> {
        self.client.post(communities::LIST, community).await
    }

    pub async fn update(&self, id: &str, update: &UpdateCommunity) -> Result<Community> {
        self.client.put(&communities::by_id(id), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&communities::by_id(id)).await
    }

    pub async fn stats(&self, id: &str) -> Result<CommunityStats> {
        self.client.get(&communities::stats(id)).await
    }

    pub async fn members(
        &self,
        id: &str,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<CommunityMember>> {
        self.client
            .page(ApiRequest::get(communities::members(id)).query(params)?)
            .await
    }

    pub async fn update_member_role(
        &self,
        community_id: &str,
        member_id: &str,
        role: CommunityRole,
    ) -> Result<()> {
        let request = ApiRequest::patch(communities::member_role(community_id, member_id))
            .json(&RoleRequest { role })?;
        self.client.execute_empty(request).await
    }

    pub async fn remove_member(&self, community_id: &str, member_id: &str) -> Result<()> {
        self.client
            .delete(&communities::member(community_id, member_id))
            .await
    }

    pub async fn approve_member(&self, community_id: &str, member_id: &str) -> Result<()> {
        self.client
            .execute_empty(ApiRequest::patch(communities::approve_member(
                community_id,
                member_id,
            )))
            .await
    }

    pub async fn reject_member(&self, community_id: &str, member_id: &str) -> Result<()> {
        self.client
            .execute_empty(ApiRequest::patch(communities::reject_member(
                community_id,
                member_id,
            )))
            .await
    }

    pub async fn by_commune(&self, commune_id: &str) -> Result<Vec<Community>> {
        self.client.get(&communities::by_commune(commune_id)).await
    }
}
