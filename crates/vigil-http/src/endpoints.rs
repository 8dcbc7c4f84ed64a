//! Endpoint paths and wire types for the back-office API.
//!
//! Paths are relative to the API base URL. Builders percent-encode every
//! identifier they splice into a path.

#![allow(dead_code)]

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use vigil_core::models::User;

fn seg(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

// ============================================================================
// Auth
// ============================================================================

pub mod auth {
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const LOGOUT: &str = "/auth/logout";
    pub const REFRESH: &str = "/auth/refresh";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const VERIFY_RESET_CODE: &str = "/auth/verify-reset-code";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const VERIFY_OTP: &str = "/auth/verify-otp";
    pub const RESEND_OTP: &str = "/auth/resend-otp";
}

// ============================================================================
// Users
// ============================================================================

pub mod users {
    use super::seg;

    pub const LIST: &str = "/users";
    pub const ME: &str = "/users/me";
    pub const COMPLETE_PROFILE: &str = "/users/complete-profile";

    pub fn by_id(id: &str) -> String {
        format!("/users/{}", seg(id))
    }

    pub fn toggle_status(id: &str) -> String {
        format!("/users/{}/toggle-status", seg(id))
    }

    pub fn change_password(id: &str) -> String {
        format!("/users/{}/change-password", seg(id))
    }

    pub fn profile_picture(id: &str) -> String {
        format!("/users/{}/profile-picture", seg(id))
    }
}

// ============================================================================
// Identity verification
// ============================================================================

pub mod identity_verification {
    use super::seg;

    pub const SUBMIT: &str = "/identity-verification/submit";
    pub const STATUS: &str = "/identity-verification/status";
    pub const ADMIN_LIST: &str = "/admin/identity-verifications";

    pub fn approve(id: &str) -> String {
        format!("/identity-verification/{}/approve", seg(id))
    }

    pub fn reject(id: &str) -> String {
        format!("/identity-verification/{}/reject", seg(id))
    }

    pub fn document(face: &str) -> String {
        format!("/identity-verification/document/{}", seg(face))
    }

    pub fn admin_approve(id: &str) -> String {
        format!("/admin/identity-verifications/{}/approve", seg(id))
    }

    pub fn admin_reject(id: &str) -> String {
        format!("/admin/identity-verifications/{}/reject", seg(id))
    }
}

// ============================================================================
// Agents
// ============================================================================

pub mod agents {
    use super::seg;

    pub const LIST: &str = "/agents";
    pub const USERS_FOR_SELECT: &str = "/agents/users-for-select";

    pub fn by_id(id: &str) -> String {
        format!("/agents/{}", seg(id))
    }

    pub fn toggle_availability(id: &str) -> String {
        format!("/agents/{}/toggle-availability", seg(id))
    }

    pub fn approve(id: &str) -> String {
        format!("/agents/{}/approve", seg(id))
    }

    pub fn reject(id: &str) -> String {
        format!("/agents/{}/reject", seg(id))
    }

    pub fn document(agent_id: &str, document_id: &str) -> String {
        format!("/agents/{}/documents/{}", seg(agent_id), seg(document_id))
    }

    pub fn approve_document(agent_id: &str, document_id: &str) -> String {
        format!("{}/approve", document(agent_id, document_id))
    }

    pub fn reject_document(agent_id: &str, document_id: &str) -> String {
        format!("{}/reject", document(agent_id, document_id))
    }

    pub fn certification(agent_id: &str, certification_id: &str) -> String {
        format!(
            "/agents/{}/certifications/{}",
            seg(agent_id),
            seg(certification_id)
        )
    }

    pub fn approve_certification(agent_id: &str, certification_id: &str) -> String {
        format!("{}/approve", certification(agent_id, certification_id))
    }

    pub fn reject_certification(agent_id: &str, certification_id: &str) -> String {
        format!("{}/reject", certification(agent_id, certification_id))
    }
}

// ============================================================================
// Missions
// ============================================================================

pub mod missions {
    use super::seg;

    pub const LIST: &str = "/missions";
    pub const MY: &str = "/missions/my";
    pub const MY_HISTORY: &str = "/missions/my/history";
    pub const AGENT: &str = "/missions/agent";

    pub fn by_id(id: &str) -> String {
        format!("/missions/{}", seg(id))
    }

    pub fn cancel(id: &str) -> String {
        format!("/missions/{}/cancel", seg(id))
    }

    pub fn accept(id: &str) -> String {
        format!("/missions/{}/accept", seg(id))
    }

    pub fn start(id: &str) -> String {
        format!("/missions/{}/start", seg(id))
    }

    pub fn complete(id: &str) -> String {
        format!("/missions/{}/complete", seg(id))
    }

    pub fn assign(id: &str) -> String {
        format!("/missions/{}/assign", seg(id))
    }

    pub fn status(id: &str) -> String {
        format!("/missions/{}/status", seg(id))
    }
}

// ============================================================================
// Reviews
// ============================================================================

pub mod reviews {
    use super::seg;

    pub const LIST: &str = "/reviews";
    pub const MY: &str = "/reviews/my";

    pub fn by_id(id: &str) -> String {
        format!("/reviews/{}", seg(id))
    }

    pub fn for_agent(agent_id: &str) -> String {
        format!("/reviews/agent/{}", seg(agent_id))
    }
}

// ============================================================================
// Communities
// ============================================================================

pub mod communities {
    use super::seg;

    pub const LIST: &str = "/communautes";

    pub fn by_id(id: &str) -> String {
        format!("/communautes/{}", seg(id))
    }

    pub fn join(id: &str) -> String {
        format!("/communautes/{}/join", seg(id))
    }

    pub fn leave(id: &str) -> String {
        format!("/communautes/{}/leave", seg(id))
    }

    pub fn stats(id: &str) -> String {
        format!("/communautes/{}/stats", seg(id))
    }

    pub fn members(id: &str) -> String {
        format!("/communautes/{}/membres", seg(id))
    }

    pub fn by_commune(commune_id: &str) -> String {
        format!("/communautes/commune/{}", seg(commune_id))
    }

    pub fn member(community_id: &str, member_id: &str) -> String {
        format!(
            "/communautes/{}/membres/{}",
            seg(community_id),
            seg(member_id)
        )
    }

    pub fn member_role(community_id: &str, member_id: &str) -> String {
        format!("{}/role", member(community_id, member_id))
    }

    pub fn approve_member(community_id: &str, member_id: &str) -> String {
        format!("{}/approve", member(community_id, member_id))
    }

    pub fn reject_member(community_id: &str, member_id: &str) -> String {
        format!("{}/reject", member(community_id, member_id))
    }
}

// ============================================================================
// Incidents
// ============================================================================

pub mod incidents {
    use super::seg;

    pub const LIST: &str = "/incidents";

    pub fn by_id(id: &str) -> String {
        format!("/incidents/{}", seg(id))
    }

    pub fn by_community(community_id: &str) -> String {
        format!("/incidents/communaute/{}", seg(community_id))
    }

    pub fn status(id: &str) -> String {
        format!("/incidents/{}/status", seg(id))
    }

    pub fn confirm(id: &str) -> String {
        format!("/incidents/{}/confirm", seg(id))
    }

    pub fn comment(id: &str) -> String {
        format!("/incidents/{}/comment", seg(id))
    }

    pub fn activities(id: &str) -> String {
        format!("/incidents/{}/activities", seg(id))
    }

    pub fn photo(incident_id: &str, photo_id: &str) -> String {
        format!("/incidents/{}/photo/{}", seg(incident_id), seg(photo_id))
    }
}

// ============================================================================
// Payments
// ============================================================================

pub mod payments {
    use super::seg;

    pub const LIST: &str = "/payments";
    pub const INITIATE: &str = "/payments/initiate";
    pub const VERIFY: &str = "/payments/verify";
    pub const METHODS: &str = "/payments/methods";
    pub const TRANSACTIONS: &str = "/payments/transactions";

    pub fn by_id(id: &str) -> String {
        format!("/payments/{}", seg(id))
    }

    pub fn refund(id: &str) -> String {
        format!("/payments/{}/refund", seg(id))
    }
}

// ============================================================================
// Reference data
// ============================================================================

pub mod reference {
    use super::seg;

    pub const COMMUNES: &str = "/reference/communes";
    pub const TYPES_INCIDENTS: &str = "/reference/types-incidents";
    pub const TYPES_MISSIONS: &str = "/reference/type-missions";
    pub const SOUS_TYPES_MISSIONS: &str = "/reference/sous-type-missions";
    pub const EQUIPEMENTS: &str = "/reference/equipements";
    pub const CERTIFICATIONS: &str = "/reference/certifications";
    pub const SPECIALISATIONS: &str = "/reference/specialisations";
    pub const DOCUMENT_TYPES: &str = "/reference/document-types";

    /// Path of one entry in a reference collection.
    pub fn entry(collection: &str, id: &str) -> String {
        format!("{}/{}", collection, seg(id))
    }
}

// ============================================================================
// Roles and permissions
// ============================================================================

pub mod roles {
    use super::seg;

    pub const LIST: &str = "/roles";

    pub fn by_id(id: &str) -> String {
        format!("/roles/{}", seg(id))
    }
}

pub mod permissions {
    use super::seg;

    pub const LIST: &str = "/permissions";

    pub fn by_id(id: &str) -> String {
        format!("/permissions/{}", seg(id))
    }
}

// ============================================================================
// Notifications
// ============================================================================

pub mod notifications {
    use super::seg;

    pub const LIST: &str = "/notifications";
    pub const READ_ALL: &str = "/notifications/read-all";
    pub const SETTINGS: &str = "/notifications/settings";
    pub const SEND: &str = "/notifications/send";
    pub const SEND_BULK: &str = "/notifications/send-bulk";

    pub fn mark_read(id: &str) -> String {
        format!("/notifications/{}/read", seg(id))
    }
}

// ============================================================================
// Dashboard
// ============================================================================

pub mod dashboard {
    pub const STATS: &str = "/dashboard/stats";
    pub const AGENTS: &str = "/dashboard/agents";
    pub const MISSIONS: &str = "/dashboard/missions";
    pub const PAYMENTS: &str = "/dashboard/payments";
    pub const INCIDENTS: &str = "/dashboard/incidents";
    pub const COMMUNITIES: &str = "/dashboard/communities";
    pub const RECENT_ACTIVITY: &str = "/dashboard/recent-activity";
}

// ============================================================================
// Reports, settings, audit logs
// ============================================================================

pub mod reports {
    use super::seg;

    pub const MISSIONS: &str = "/reports/missions";
    pub const AGENTS: &str = "/reports/agents";
    pub const PAYMENTS: &str = "/reports/payments";
    pub const INCIDENTS: &str = "/reports/incidents";
    pub const USERS: &str = "/reports/users";

    pub fn export(kind: &str, format: &str) -> String {
        format!("/reports/{}/export?format={}", seg(kind), seg(format))
    }
}

pub mod settings {
    pub const GENERAL: &str = "/settings/general";
    pub const PRICING: &str = "/settings/pricing";
    pub const NOTIFICATIONS: &str = "/settings/notifications";
}

pub mod audit_logs {
    use super::seg;

    pub const LIST: &str = "/audit-logs";
    pub const EXPORT: &str = "/audit-logs/export";

    pub fn by_id(id: &str) -> String {
        format!("/audit-logs/{}", seg(id))
    }
}

// ============================================================================
// Files, locations, chat
// ============================================================================

pub mod files {
    use super::seg;

    pub const UPLOAD: &str = "/files/upload";

    pub fn by_id(id: &str) -> String {
        format!("/files/{}", seg(id))
    }
}

pub mod locations {
    pub const SEARCH: &str = "/locations/search";
    pub const ZONE: &str = "/locations/zone";
}

pub mod chat {
    use super::seg;

    pub const LIST: &str = "/chats";

    pub fn by_id(id: &str) -> String {
        format!("/chats/{}", seg(id))
    }

    pub fn messages(id: &str) -> String {
        format!("/chats/{}/messages", seg(id))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// `data` of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Token lifetime in seconds. Sent as a string or a number depending on
    /// the server version; kept as text.
    #[serde(default, deserialize_with = "string_or_number")]
    pub expires_in: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// Request body for the refresh call.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// `data` of a successful refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshData {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyResetCodeRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

/// Request body for a password reset.
#[derive(Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub password: String,
    pub password_confirmation: String,
}

impl std::fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("email", &self.email)
            .field("code", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct RejectionRequest<'a> {
    pub rejection_reason: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CancellationRequest<'a> {
    pub cancellation_reason: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AssignRequest<'a> {
    pub agent_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct StatusRequest<S> {
    pub status: S,
}

#[derive(Debug, Serialize)]
pub struct RoleRequest<R> {
    pub role: R,
}

#[derive(Debug, Serialize)]
pub struct LimitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
