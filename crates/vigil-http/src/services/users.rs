//! User accounts.

use vigil_core::models::{ChangePassword, UpdateUser, User, UserFilters};
use vigil_core::{PaginatedResponse, Result};

use crate::client::ApiClient;
use crate::endpoints::users;
use crate::request::ApiRequest;

#[derive(Debug, Clone, Copy)]
pub struct UsersService<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &UserFilters) -> Result<PaginatedResponse<User>> {
        self.client
            .page(ApiRequest::get(users::LIST).query(filters)?)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        self.client.get(&users::by_id(id)).await
    }

    pub async fn update(&self, id: &str, update: &UpdateUser) -> Result<User> {
        self.client.put(&users::by_id(id), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&users::by_id(id)).await
    }

    /// Activate or deactivate an account; returns the updated user.
    pub async fn toggle_status(&self, id: &str) -> Result<User> {
        self.client
            .data(ApiRequest::patch(users::toggle_status(id)))
            .await
    }

    pub async fn change_password(&self, id: &str, change: &ChangePassword) -> Result<()> {
        let request = ApiRequest::post(users::change_password(id)).json(change)?;
        self.client.execute_empty(request).await
    }

    /// Absolute URL of a user's profile picture.
    pub fn profile_picture_url(&self, id: &str) -> String {
        self.client.url(&users::profile_picture(id))
    }
}
