//! Mock API tests for vigil-http.
//!
//! A wiremock server stands in for the back-office API so the refresh cycle,
//! teardown and facades can be exercised without network access.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vigil_core::error::{AuthError, TransportError};
use vigil_core::models::{
    AgentFilters, AgentStatus, DocumentType, MissionFilters, MissionStatus, PaginationParams,
    User,
};
use vigil_core::{
    AccessToken, ApiUrl, Credentials, Error, MemoryTokenStore, Navigator, RefreshToken, Session,
};
use vigil_http::services::{
    NewAgent, NewAgentCertification, NewAgentDocument, NewAgentSpecialisation, Upload,
};
use vigil_http::{ApiClient, ApiRequest, Backoffice, ClientConfig};

const PREFIX: &str = "/api/v1";

#[derive(Default)]
struct Recorder(Mutex<Vec<String>>);

impl Recorder {
    fn visits(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for Recorder {
    fn navigate(&self, path: &str) {
        self.0.lock().unwrap().push(path.to_string());
    }
}

struct Harness {
    server: MockServer,
    backoffice: Backoffice,
    navigator: Arc<Recorder>,
}

impl Harness {
    async fn new(access: Option<&str>, refresh: Option<&str>) -> Self {
        Self::configured(access, refresh, |config| config).await
    }

    async fn configured(
        access: Option<&str>,
        refresh: Option<&str>,
        configure: impl FnOnce(ClientConfig) -> ClientConfig,
    ) -> Self {
        let server = MockServer::start().await;
        let store = match access {
            Some(access) => MemoryTokenStore::with_tokens(
                AccessToken::new(access),
                refresh.map(RefreshToken::new),
            ),
            None => MemoryTokenStore::new(),
        };
        let navigator = Arc::new(Recorder::default());
        let session = Session::new(Arc::new(store), navigator.clone());
        let config = configure(ClientConfig::new(api_url(&server)));
        let backoffice = Backoffice::new(config, session).unwrap();
        Self {
            server,
            backoffice,
            navigator,
        }
    }

    fn client(&self) -> &ApiClient {
        self.backoffice.client()
    }

    fn session(&self) -> &Session {
        self.backoffice.session()
    }

    fn access(&self) -> Option<String> {
        self.session().access_token().map(|t| t.as_str().to_string())
    }

    fn refresh(&self) -> Option<String> {
        self.session().refresh_token().map(|t| t.as_str().to_string())
    }
}

fn api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(format!("http://127.0.0.1:{}{}", server.address().port(), PREFIX)).unwrap()
}

fn p(suffix: &str) -> String {
    format!("{}{}", PREFIX, suffix)
}

fn envelope(data: Value) -> Value {
    json!({ "success": true, "message": "OK", "data": data })
}

fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "first_name": "Awa",
        "last_name": "Koné",
        "email": "awa@alphsecurite.ci",
        "is_active": true
    })
}

fn mission_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "reference": "MIS-0001",
        "title": "Gardiennage entrepôt",
        "address": "Zone 4",
        "start_date": "2025-01-10",
        "duration_hours": 8.0,
        "hour_price": 2500.0,
        "total_amount": 20000.0,
        "status": status
    })
}

fn agent_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "slug": "kouassi-yao",
        "user": {
            "id": "u9",
            "first_name": "Yao",
            "last_name": "Kouassi",
            "email": "yao@alphsecurite.ci"
        },
        "status": status
    })
}

async fn mount_refresh(server: &MockServer, refresh: &str, data: Value, expect: u64) {
    Mock::given(method("POST"))
        .and(path(p("/auth/refresh")))
        .and(body_json(json!({ "refresh_token": refresh })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(data)))
        .expect(expect)
        .mount(server)
        .await;
}

async fn mount_refresh_never(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(p("/auth/refresh")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

// ============================================================================
// Header injection
// ============================================================================

#[tokio::test]
async fn test_bearer_header_injected_when_token_present() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json("u1"))))
        .expect(1)
        .mount(&h.server)
        .await;

    let me = h.backoffice.auth().current_user().await.unwrap();
    assert_eq!(me.id, "u1");
    h.server.verify().await;
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let h = Harness::new(None, None).await;

    Mock::given(method("POST"))
        .and(path(p("/auth/forgot-password")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(Value::Null)))
        .mount(&h.server)
        .await;

    h.backoffice
        .auth()
        .forgot_password("awa@alphsecurite.ci")
        .await
        .unwrap();

    let requests = h.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(
        requests[0].headers.get("accept").unwrap().to_str().unwrap(),
        "application/json"
    );
}

// ============================================================================
// Refresh cycle
// ============================================================================

#[tokio::test]
async fn test_expired_token_is_refreshed_and_request_retried() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Token expired"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    mount_refresh(&h.server, "R1", json!({ "access_token": "T2" }), 1).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json("u1"))))
        .expect(1)
        .mount(&h.server)
        .await;

    let me: User = h.backoffice.auth().current_user().await.unwrap();
    assert_eq!(me.email, "awa@alphsecurite.ci");

    assert_eq!(h.access().as_deref(), Some("T2"));
    assert_eq!(h.refresh().as_deref(), Some("R1"));
    assert!(h.navigator.visits().is_empty());
    h.server.verify().await;
}

#[tokio::test]
async fn test_refresh_stores_rotated_refresh_token() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/dashboard/stats")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&h.server)
        .await;

    mount_refresh(
        &h.server,
        "R1",
        json!({ "access_token": "T2", "refresh_token": "R2" }),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path(p("/dashboard/agents")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "total": 3,
            "by_status": { "pending": 1, "approved": 2, "rejected": 0 },
            "by_commune": [{ "commune": "Cocody", "count": 3 }]
        }))))
        .mount(&h.server)
        .await;

    Mock::given(method("GET"))
        .and(path(p("/dashboard/stats")))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "users": { "total": 10, "active": 8, "new_this_month": 2 },
            "agents": { "total": 3, "active": 3, "available": 1, "pending_approval": 1 },
            "missions": {
                "total": 5, "pending": 1, "in_progress": 1, "completed": 2, "cancelled": 1,
                "revenue_total": 100000.0, "revenue_this_month": 20000.0
            },
            "communities": { "total": 2, "active": 2, "total_members": 40 },
            "incidents": { "total": 7, "open": 3, "resolved": 4, "critical": 1 }
        }))))
        .mount(&h.server)
        .await;

    let stats = h.backoffice.dashboard().stats().await.unwrap();
    assert_eq!(stats.users.total, 10);
    assert_eq!(h.refresh().as_deref(), Some("R2"));

    let agents = h.backoffice.dashboard().agents_stats().await.unwrap();
    assert_eq!(agents.by_status.get("approved"), Some(&2));
    h.server.verify().await;
}

#[tokio::test]
async fn test_second_401_is_propagated_without_another_refresh() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Unauthenticated."
        })))
        .expect(2)
        .mount(&h.server)
        .await;

    mount_refresh(&h.server, "R1", json!({ "access_token": "T2" }), 1).await;

    let err = h.backoffice.auth().current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "api error: HTTP 401: Unauthenticated.");

    // The retry's failure is returned as-is; the refreshed session survives.
    assert_eq!(h.access().as_deref(), Some("T2"));
    assert!(h.navigator.visits().is_empty());
    h.server.verify().await;
}

#[tokio::test]
async fn test_refresh_failure_tears_down_session() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/missions")))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("POST"))
        .and(path(p("/auth/refresh")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Refresh token expired"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let err = h
        .backoffice
        .missions()
        .list(&MissionFilters::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(h.access().is_none());
    assert!(h.refresh().is_none());
    assert_eq!(h.navigator.visits(), vec!["/login".to_string()]);
    h.server.verify().await;
}

#[tokio::test]
async fn test_malformed_refresh_response_tears_down_session() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&h.server)
        .await;

    Mock::given(method("POST"))
        .and(path(p("/auth/refresh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&h.server)
        .await;

    let err = h.backoffice.auth().current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!h.session().is_authenticated());
    assert_eq!(h.navigator.visits(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_missing_refresh_token_tears_down_without_refresh_call() {
    let h = Harness::new(Some("T1"), None).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;
    mount_refresh_never(&h.server).await;

    let err = h.backoffice.auth().current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(h.access().is_none());
    assert_eq!(h.navigator.visits(), vec!["/login".to_string()]);
    h.server.verify().await;
}

#[tokio::test]
async fn test_unauthenticated_request_without_tokens_is_torn_down() {
    let h = Harness::new(None, None).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;
    mount_refresh_never(&h.server).await;

    let err = h.backoffice.auth().current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(h.navigator.visits(), vec!["/login".to_string()]);
    h.server.verify().await;
}

#[tokio::test]
async fn test_non_401_errors_pass_through_untouched() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/missions/m404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Mission introuvable"
        })))
        .mount(&h.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(p("/missions/m500")))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&h.server)
        .await;

    Mock::given(method("GET"))
        .and(path(p("/missions/m403")))
        .respond_with(ResponseTemplate::new(403))
        .mount(&h.server)
        .await;

    mount_refresh_never(&h.server).await;

    let err = h.backoffice.missions().get("m404").await.unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.message.as_deref(), Some("Mission introuvable"));
        }
        other => panic!("expected API error, got {other:?}"),
    }

    let err = h.backoffice.missions().delete("m500").await.unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 500);
            assert_eq!(api.body, "boom");
            assert!(api.message.is_none());
        }
        other => panic!("expected API error, got {other:?}"),
    }

    let err = h.backoffice.missions().get("m403").await.unwrap_err();
    assert_eq!(err.status(), Some(403));

    assert_eq!(h.access().as_deref(), Some("T1"));
    assert!(h.navigator.visits().is_empty());
    h.server.verify().await;
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let h = Harness::configured(Some("T1"), Some("R1"), |config| {
        config.with_timeout(Duration::from_millis(100))
    })
    .await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(user_json("u1")))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&h.server)
        .await;
    mount_refresh_never(&h.server).await;

    let err = h.backoffice.auth().current_user().await.unwrap_err();

    assert!(
        matches!(
            err,
            Error::Transport(TransportError::Timeout { duration_ms: 100 })
        ),
        "unexpected error: {err:?}"
    );
    assert_eq!(h.access().as_deref(), Some("T1"));
    assert!(h.navigator.visits().is_empty());
    h.server.verify().await;
}

#[tokio::test]
async fn test_connection_failure_propagates_without_refresh_or_teardown() {
    // Bind then release a port so nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let navigator = Arc::new(Recorder::default());
    let session = Session::new(
        Arc::new(MemoryTokenStore::with_tokens(
            AccessToken::new("T1"),
            Some(RefreshToken::new("R1")),
        )),
        navigator.clone(),
    );
    let url = ApiUrl::new(format!("http://127.0.0.1:{}{}", port, PREFIX)).unwrap();
    let backoffice = Backoffice::new(ClientConfig::new(url), session).unwrap();

    let err = backoffice.missions().get("m1").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "unexpected error: {err:?}");
    assert_eq!(
        backoffice.session().access_token(),
        Some(AccessToken::new("T1"))
    );
    assert_eq!(
        backoffice.session().refresh_token().map(|t| t.as_str().to_string()),
        Some("R1".to_string())
    );
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn test_concurrent_401s_refresh_independently() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(200)))
        .expect(2)
        .mount(&h.server)
        .await;

    mount_refresh(&h.server, "R1", json!({ "access_token": "T2" }), 2).await;

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json("u1"))))
        .expect(2)
        .mount(&h.server)
        .await;

    let auth = h.backoffice.auth();
    let (a, b) = tokio::join!(auth.current_user(), auth.current_user());
    assert_eq!(a.unwrap().id, "u1");
    assert_eq!(b.unwrap().id, "u1");
    assert_eq!(h.access().as_deref(), Some("T2"));
    h.server.verify().await;
}

#[tokio::test]
async fn test_explicit_refresh_failure_keeps_session() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("POST"))
        .and(path(p("/auth/refresh")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    let err = h.backoffice.auth().refresh().await.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::RefreshFailed { .. })));
    assert_eq!(h.access().as_deref(), Some("T1"));
    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn test_explicit_refresh_without_refresh_token() {
    let h = Harness::new(Some("T1"), None).await;
    let err = h.client().refresh_session().await.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::RefreshTokenMissing)));
}

#[tokio::test]
async fn test_refresh_call_carries_no_bearer_header() {
    let h = Harness::new(Some("T1"), Some("R1")).await;
    mount_refresh(&h.server, "R1", json!({ "access_token": "T2" }), 1).await;

    let token = h.client().refresh_session().await.unwrap();
    assert_eq!(token.as_str(), "T2");

    let requests = h.server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_retry_replays_query_and_body() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("PATCH"))
        .and(path(p("/missions/m1/cancel")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&h.server)
        .await;

    mount_refresh(&h.server, "R1", json!({ "access_token": "T2" }), 1).await;

    Mock::given(method("PATCH"))
        .and(path(p("/missions/m1/cancel")))
        .and(header("authorization", "Bearer T2"))
        .and(body_json(json!({ "cancellation_reason": "Client absent" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(mission_json("m1", "cancelled"))),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let mission = h
        .backoffice
        .missions()
        .cancel("m1", "Client absent")
        .await
        .unwrap();
    assert_eq!(mission.status, MissionStatus::Cancelled);
    h.server.verify().await;
}

#[tokio::test]
async fn test_raw_execute_returns_untyped_body() {
    let h = Harness::new(Some("T1"), None).await;

    Mock::given(method("GET"))
        .and(path(p("/settings/general")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "site_name": "Alpha"
        }))))
        .mount(&h.server)
        .await;

    let body: Value = h
        .client()
        .execute(ApiRequest::get("/settings/general"))
        .await
        .unwrap();
    assert_eq!(body["data"]["site_name"], "Alpha");
}

// ============================================================================
// Multipart client
// ============================================================================

fn new_agent() -> NewAgent {
    NewAgent {
        commune_id: "c1".into(),
        hour_price: Some(2500.0),
        is_available: Some(false),
        documents: vec![NewAgentDocument {
            file: Upload::new("casier.pdf", b"%PDF-1.4".to_vec()).with_mime("application/pdf"),
            document_type: DocumentType::CasierJudiciare,
            is_active: Some(true),
        }],
        specialisations: vec![NewAgentSpecialisation {
            specialisation_id: "s1".into(),
            is_active: None,
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_multipart_create_agent_form_fields() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("POST"))
        .and(path(p("/agents")))
        .and(header("authorization", "Bearer T1"))
        .and(body_string_contains("name=\"commune_id\""))
        .and(body_string_contains("name=\"documents[0][file]\"; filename=\"casier.pdf\""))
        .and(body_string_contains("name=\"documents[0][document_type]\""))
        .and(body_string_contains("CASIER_JUDICIARE"))
        .and(body_string_contains("name=\"specialisations[0][specialisation_id]\""))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(agent_json("a1", "pending"))),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let agent = h.backoffice.agents().create(new_agent()).await.unwrap();
    assert_eq!(agent.id, "a1");
    assert_eq!(agent.status, AgentStatus::Pending);

    let requests = h.server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"is_available\"\r\n\r\n0"));
    assert!(body.contains("name=\"documents[0][is_active]\"\r\n\r\n1"));
    assert!(!body.contains("name=\"slug\""));
    h.server.verify().await;
}

#[tokio::test]
async fn test_multipart_omits_empty_text_fields() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("POST"))
        .and(path(p("/agents")))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(agent_json("a1", "pending"))),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let agent = NewAgent {
        user_id: Some(String::new()),
        slug: Some(String::new()),
        certifications: vec![NewAgentCertification {
            certification_id: Some("cert1".into()),
            certification_number: Some(String::new()),
            certification_date: Some(String::new()),
            ..Default::default()
        }],
        ..new_agent()
    };
    h.backoffice.agents().create(agent).await.unwrap();

    let requests = h.server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("name=\"user_id\""));
    assert!(!body.contains("name=\"slug\""));
    assert!(!body.contains("certification_number"));
    assert!(!body.contains("certification_date"));
    assert!(body.contains("name=\"certifications[0][certification_id]\"\r\n\r\ncert1"));
    h.server.verify().await;
}

#[tokio::test]
async fn test_multipart_401_tears_down_without_refresh() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("POST"))
        .and(path(p("/agents")))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;
    mount_refresh_never(&h.server).await;

    let err = h.backoffice.agents().create(new_agent()).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(h.access().is_none());
    assert!(h.refresh().is_none());
    assert_eq!(h.navigator.visits(), vec!["/login".to_string()]);
    h.server.verify().await;
}

// ============================================================================
// Facades
// ============================================================================

#[tokio::test]
async fn test_login_persists_tokens() {
    let h = Harness::new(None, None).await;

    Mock::given(method("POST"))
        .and(path(p("/auth/login")))
        .and(body_json(json!({ "login": "awa@alphsecurite.ci", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "user": user_json("u1"),
            "access_token": "T1",
            "refresh_token": "R1",
            "token_type": "bearer",
            "expires_in": 3600
        }))))
        .mount(&h.server)
        .await;

    let response = h
        .backoffice
        .auth()
        .login(&Credentials::new("awa@alphsecurite.ci", "secret"))
        .await
        .unwrap();

    assert_eq!(response.user.id, "u1");
    assert_eq!(response.expires_in.as_deref(), Some("3600"));
    assert!(h.backoffice.auth().is_authenticated());
    assert_eq!(h.access().as_deref(), Some("T1"));
    assert_eq!(h.refresh().as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_login_accepts_textual_expiry() {
    let h = Harness::new(None, None).await;

    Mock::given(method("POST"))
        .and(path(p("/auth/login")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "user": user_json("u1"),
            "access_token": "T1",
            "refresh_token": "R1",
            "token_type": "bearer",
            "expires_in": "3600"
        }))))
        .expect(1)
        .mount(&h.server)
        .await;

    let response = h
        .backoffice
        .auth()
        .login(&Credentials::new("awa@alphsecurite.ci", "secret"))
        .await
        .unwrap();

    assert_eq!(response.expires_in.as_deref(), Some("3600"));
    assert!(h.backoffice.auth().is_authenticated());
    assert_eq!(h.access().as_deref(), Some("T1"));
    assert_eq!(h.refresh().as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let h = Harness::new(None, None).await;

    Mock::given(method("POST"))
        .and(path(p("/auth/login")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Identifiants invalides"
        })))
        .mount(&h.server)
        .await;

    let err = h
        .backoffice
        .auth()
        .login(&Credentials::new("awa@alphsecurite.ci", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::InvalidCredentials)));
    assert!(!h.backoffice.auth().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_tokens_even_when_call_fails() {
    let h = Harness::new(Some("T1"), Some("R1")).await;

    Mock::given(method("POST"))
        .and(path(p("/auth/logout")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&h.server)
        .await;

    let err = h.backoffice.auth().logout().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(h.access().is_none());
    assert!(h.refresh().is_none());
    h.server.verify().await;
}

#[tokio::test]
async fn test_list_sends_filters_and_returns_pagination() {
    let h = Harness::new(Some("T1"), None).await;

    Mock::given(method("GET"))
        .and(path(p("/agents")))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "OK",
            "data": [agent_json("a1", "pending"), agent_json("a2", "pending")],
            "pagination": { "total_rows": 12, "per_page": 10, "current_page": 2, "last_page": 2 }
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let filters = AgentFilters {
        page: PaginationParams::page(2, 10),
        status: Some(AgentStatus::Pending),
        ..Default::default()
    };
    let page = h.backoffice.agents().list(&filters).await.unwrap();

    assert_eq!(page.data.len(), 2);
    let pagination = page.pagination.unwrap();
    assert_eq!(pagination.total_rows, 12);
    assert!(!pagination.has_more());
    h.server.verify().await;
}

#[tokio::test]
async fn test_moderation_bodies() {
    let h = Harness::new(Some("T1"), None).await;

    Mock::given(method("PATCH"))
        .and(path(p("/agents/a1/reject")))
        .and(body_json(json!({ "rejection_reason": "Casier manquant" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(agent_json("a1", "rejected"))),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(p("/missions/m1/assign")))
        .and(body_json(json!({ "agent_id": "a1" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(mission_json("m1", "accepted"))),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(p("/communautes/c1/membres/m1/role")))
        .and(body_json(json!({ "role": "moderator" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;

    let agent = h
        .backoffice
        .agents()
        .reject("a1", "Casier manquant")
        .await
        .unwrap();
    assert_eq!(agent.status, AgentStatus::Rejected);

    let mission = h.backoffice.missions().assign("m1", "a1").await.unwrap();
    assert_eq!(mission.status, MissionStatus::Accepted);

    h.backoffice
        .communities()
        .update_member_role("c1", "m1", vigil_core::models::CommunityRole::Moderator)
        .await
        .unwrap();
    h.server.verify().await;
}

#[tokio::test]
async fn test_reference_tables_and_recent_activity() {
    let h = Harness::new(Some("T1"), None).await;

    Mock::given(method("GET"))
        .and(path(p("/reference/communes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": "c1", "name": "Cocody", "code": "COC" },
            { "id": "c2", "name": "Yopougon" }
        ]))))
        .mount(&h.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(p("/reference/equipements/e1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(Value::Null)))
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("GET"))
        .and(path(p("/dashboard/recent-activity")))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": "r1", "type": "mission_created", "description": "Nouvelle mission" }
        ]))))
        .expect(1)
        .mount(&h.server)
        .await;

    let communes = h.backoffice.reference().communes().await.unwrap();
    assert_eq!(communes.len(), 2);
    assert_eq!(communes[0].code.as_deref(), Some("COC"));

    h.backoffice
        .reference()
        .delete(vigil_http::services::ReferenceTable::Equipements, "e1")
        .await
        .unwrap();

    let activity = h
        .backoffice
        .dashboard()
        .recent_activity(Some(5))
        .await
        .unwrap();
    assert_eq!(activity[0].description, "Nouvelle mission");
    h.server.verify().await;
}

#[tokio::test]
async fn test_resource_urls() {
    let h = Harness::new(None, None).await;
    let base = api_url(&h.server);

    assert_eq!(
        h.backoffice.users().profile_picture_url("u1"),
        base.endpoint("/users/u1/profile-picture")
    );
    assert_eq!(
        h.backoffice.agents().document_url("a1", "d1"),
        base.endpoint("/agents/a1/documents/d1")
    );
    assert_eq!(
        h.backoffice.incidents().photo_url("i1", "p1"),
        base.endpoint("/incidents/i1/photo/p1")
    );
}
