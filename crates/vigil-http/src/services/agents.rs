//! Security agents, their documents and certifications.

use reqwest::multipart::{Form, Part};
use tracing::instrument;

use vigil_core::error::InvalidInputError;
use vigil_core::models::{
    Agent, AgentFilters, DocumentType, UpdateAgent, UserSelectOption, UserSelectParams,
};
use vigil_core::{PaginatedResponse, Result};

use crate::client::ApiClient;
use crate::endpoints::{RejectionRequest, agents};
use crate::multipart::MultipartClient;
use crate::request::ApiRequest;

/// A file to upload.
#[derive(Clone)]
pub struct Upload {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime {
            Some(mime) => part.mime_str(&mime).map_err(|e| {
                InvalidInputError::Payload {
                    message: format!("invalid mime type '{}': {}", mime, e),
                }
                .into()
            }),
            None => Ok(part),
        }
    }
}

impl std::fmt::Debug for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct NewAgentDocument {
    pub file: Upload,
    pub document_type: DocumentType,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct NewAgentCertification {
    pub certification_id: Option<String>,
    pub certification_number: Option<String>,
    pub certification_date: Option<String>,
    pub certification_file: Option<Upload>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewAgentSpecialisation {
    pub specialisation_id: String,
    pub is_active: Option<bool>,
}

/// Payload for creating an agent, sent as `multipart/form-data`.
#[derive(Debug, Clone, Default)]
pub struct NewAgent {
    pub user_id: Option<String>,
    pub commune_id: String,
    pub slug: Option<String>,
    pub hour_price: Option<f64>,
    pub daily_price: Option<f64>,
    pub is_active: Option<bool>,
    pub is_available: Option<bool>,
    pub documents: Vec<NewAgentDocument>,
    pub certifications: Vec<NewAgentCertification>,
    pub specialisations: Vec<NewAgentSpecialisation>,
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Text fields are only sent when they carry a value.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl NewAgent {
    /// Build the form: booleans as `1`/`0`, collections as indexed fields
    /// such as `documents[0][file]`. Absent optional fields are omitted.
    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();

        if let Some(user_id) = present(self.user_id) {
            form = form.text("user_id", user_id);
        }
        form = form.text("commune_id", self.commune_id);
        if let Some(slug) = present(self.slug) {
            form = form.text("slug", slug);
        }
        if let Some(price) = self.hour_price {
            form = form.text("hour_price", price.to_string());
        }
        if let Some(price) = self.daily_price {
            form = form.text("daily_price", price.to_string());
        }
        if let Some(active) = self.is_active {
            form = form.text("is_active", flag(active));
        }
        if let Some(available) = self.is_available {
            form = form.text("is_available", flag(available));
        }

        for (i, doc) in self.documents.into_iter().enumerate() {
            form = form
                .part(format!("documents[{i}][file]"), doc.file.into_part()?)
                .text(
                    format!("documents[{i}][document_type]"),
                    doc.document_type.as_str(),
                );
            if let Some(active) = doc.is_active {
                form = form.text(format!("documents[{i}][is_active]"), flag(active));
            }
        }

        for (i, cert) in self.certifications.into_iter().enumerate() {
            if let Some(id) = present(cert.certification_id) {
                form = form.text(format!("certifications[{i}][certification_id]"), id);
            }
            if let Some(number) = present(cert.certification_number) {
                form = form.text(format!("certifications[{i}][certification_number]"), number);
            }
            if let Some(date) = present(cert.certification_date) {
                form = form.text(format!("certifications[{i}][certification_date]"), date);
            }
            if let Some(file) = cert.certification_file {
                form = form.part(
                    format!("certifications[{i}][certification_file]"),
                    file.into_part()?,
                );
            }
            if let Some(active) = cert.is_active {
                form = form.text(format!("certifications[{i}][is_active]"), flag(active));
            }
        }

        for (i, spec) in self.specialisations.into_iter().enumerate() {
            form = form.text(
                format!("specialisations[{i}][specialisation_id]"),
                spec.specialisation_id,
            );
            if let Some(active) = spec.is_active {
                form = form.text(format!("specialisations[{i}][is_active]"), flag(active));
            }
        }

        Ok(form)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AgentsService<'a> {
    client: &'a ApiClient,
    uploads: &'a MultipartClient,
}

impl<'a> AgentsService<'a> {
    pub fn new(client: &'a ApiClient, uploads: &'a MultipartClient) -> Self {
        Self { client, uploads }
    }

    pub async fn list(&self, filters: &AgentFilters) -> Result<PaginatedResponse<Agent>> {
        self.client
            .page(ApiRequest::get(agents::LIST).query(filters)?)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Agent> {
        self.client.get(&agents::by_id(id)).await
    }

    /// Create an agent with its documents. Uploads are never retried.
    #[instrument(skip(self, agent), fields(documents = agent.documents.len()))]
    pub async fn create(&self, agent: NewAgent) -> Result<Agent> {
        self.uploads.post(agents::LIST, agent.into_form()?).await
    }

    pub async fn update(&self, id: &str, update: &UpdateAgent) -> Result<Agent> {
        self.client.put(&agents::by_id(id), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&agents::by_id(id)).await
    }

    pub async fn toggle_availability(&self, id: &str) -> Result<Agent> {
        self.client
            .data(ApiRequest::patch(agents::toggle_availability(id)))
            .await
    }

    pub async fn approve(&self, id: &str) -> Result<Agent> {
        self.client.data(ApiRequest::patch(agents::approve(id))).await
    }

    pub async fn reject(&self, id: &str, reason: &str) -> Result<Agent> {
        self.client
            .patch(
                &agents::reject(id),
                &RejectionRequest {
                    rejection_reason: reason,
                },
            )
            .await
    }

    pub async fn approve_document(&self, agent_id: &str, document_id: &str) -> Result<()> {
        self.client
            .execute_empty(ApiRequest::patch(agents::approve_document(
                agent_id,
                document_id,
            )))
            .await
    }

    pub async fn reject_document(
        &self,
        agent_id: &str,
        document_id: &str,
        reason: &str,
    ) -> Result<()> {
        let request = ApiRequest::patch(agents::reject_document(agent_id, document_id)).json(
            &RejectionRequest {
                rejection_reason: reason,
            },
        )?;
        self.client.execute_empty(request).await
    }

    pub async fn approve_certification(
        &self,
        agent_id: &str,
        certification_id: &str,
    ) -> Result<()> {
        self.client
            .execute_empty(ApiRequest::patch(agents::approve_certification(
                agent_id,
                certification_id,
            )))
            .await
    }

    pub async fn reject_certification(
        &self,
        agent_id: &str,
        certification_id: &str,
        reason: &str,
    ) -> Result<()> {
        let request = ApiRequest::patch(agents::reject_certification(agent_id, certification_id))
            .json(&RejectionRequest {
                rejection_reason: reason,
            })?;
        self.client.execute_empty(request).await
    }

    /// Users that can be promoted to agents.
    pub async fn users_for_select(
        &self,
        params: &UserSelectParams,
    ) -> Result<Vec<UserSelectOption>> {
        self.client
            .data(ApiRequest::get(agents::USERS_FOR_SELECT).query(params)?)
            .await
    }

    pub fn document_url(&self, agent_id: &str, document_id: &str) -> String {
        self.client.url(&agents::document(agent_id, document_id))
    }

    pub fn certification_url(&self, agent_id: &str, certification_id: &str) -> String {
        self.client
            .url(&agents::certification(agent_id, certification_id))
    }
}
