//! End-to-end tests of the `vigil` binary against a mock API.
//!
//! Each test gets its own data directory, so the session file written by one
//! invocation is read back by the next exactly as in real use.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{Cli, envelope, p, stderr, stdout, success, user_json};

#[tokio::test]
async fn test_login_writes_session_file() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);

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
        .expect(1)
        .mount(&server)
        .await;

    let args = [
        "auth",
        "login",
        "--login",
        "awa@alphsecurite.ci",
        "--password",
        "secret",
    ];
    let out = success(&cli.run(&args).await, &args);

    assert!(out.contains("Logged in successfully"));
    assert!(out.contains("Awa Koné"));
    assert!(out.contains("Administrateur"));

    let session = cli.session();
    assert_eq!(session["access_token"], "T1");
    assert_eq!(session["refresh_token"], "R1");
    assert_eq!(session["api_url"], cli.api());
    assert!(session["saved_at"].is_string());
}

#[tokio::test]
async fn test_login_rejected_leaves_no_session() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);

    Mock::given(method("POST"))
        .and(path(p("/auth/login")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Identifiants invalides"
        })))
        .mount(&server)
        .await;

    let output = cli
        .run(&["auth", "login", "--login", "awa@alphsecurite.ci", "--password", "nope"])
        .await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to login"));
    assert!(cli.session().get("access_token").is_none());
}

#[tokio::test]
async fn test_whoami_uses_remembered_api() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", Some("R1"));

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json("u1"))))
        .expect(1)
        .mount(&server)
        .await;

    let args = ["auth", "whoami"];
    let out = success(&cli.run_stored_api(&args).await, &args);

    assert!(out.contains("awa@alphsecurite.ci"));
    assert!(out.contains(cli.api()));
}

#[tokio::test]
async fn test_refresh_on_401_persists_new_token() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", Some("R1"));

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(p("/auth/refresh")))
        .and(body_json(json!({ "refresh_token": "R1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "access_token": "T2",
            "refresh_token": "R2"
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json("u1"))))
        .expect(1)
        .mount(&server)
        .await;

    let args = ["auth", "whoami"];
    success(&cli.run(&args).await, &args);

    let session = cli.session();
    assert_eq!(session["access_token"], "T2");
    assert_eq!(session["refresh_token"], "R2");
}

#[tokio::test]
async fn test_failed_refresh_expires_session() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", Some("R1"));

    Mock::given(method("GET"))
        .and(path(p("/users/me")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Token expired"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(p("/auth/refresh")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Refresh token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = cli.run(&["auth", "whoami"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Session expired"));
    let session = cli.session();
    assert!(session.get("access_token").is_none());
    assert!(session.get("refresh_token").is_none());
    // Only the tokens are forgotten.
    assert_eq!(session["api_url"], cli.api());
}

#[tokio::test]
async fn test_logout_clears_tokens_even_on_server_error() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", Some("R1"));

    Mock::given(method("POST"))
        .and(path(p("/auth/logout")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "Server error"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = cli.run(&["auth", "logout"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("cleared anyway"));
    assert!(cli.session().get("access_token").is_none());
}

#[tokio::test]
async fn test_logout_without_session_is_a_no_op() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);

    let args = ["auth", "logout"];
    success(&cli.run(&args).await, &args);

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_commands_require_login() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);

    let output = cli.run(&["users", "list"]).await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("No active session"));
    assert!(err.contains("not authenticated"));
}

#[tokio::test]
async fn test_missions_list_prints_paging() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", Some("R1"));

    Mock::given(method("GET"))
        .and(path(p("/missions")))
        .and(query_param("status", "in_progress"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "OK",
            "data": [{
                "id": "m1",
                "reference": "MIS-0001",
                "title": "Gardiennage entrepôt",
                "start_date": "2025-01-10",
                "status": "in_progress"
            }],
            "pagination": {
                "total_rows": 31,
                "per_page": 15,
                "current_page": 2,
                "last_page": 3
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let args = ["missions", "list", "--status", "in_progress", "--page", "2"];
    let output = cli.run(&args).await;
    let out = success(&output, &args);

    assert!(out.contains("MIS-0001"));
    assert!(out.contains("in_progress"));
    let err = stderr(&output);
    assert!(err.contains("Page 2/3"));
    assert!(err.contains("31 total"));
    assert!(err.contains("Next: --page 3"));
}

#[tokio::test]
async fn test_unknown_status_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", None);

    let output = cli.run(&["missions", "list", "--status", "done"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown value"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_agent_rejection_sends_reason() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", Some("R1"));

    Mock::given(method("PATCH"))
        .and(path(p("/agents/a1/reject")))
        .and(body_json(json!({ "rejection_reason": "Documents illisibles" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": "a1",
            "slug": "kouassi-yao",
            "user": {
                "id": "u9",
                "first_name": "Yao",
                "last_name": "Kouassi",
                "email": "yao@alphsecurite.ci"
            },
            "status": "rejected",
            "rejection_reason": "Documents illisibles"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let args = ["agents", "reject", "a1", "--reason", "Documents illisibles"];
    let out = success(&cli.run(&args).await, &args);

    assert!(out.contains("Rejected Yao Kouassi"));
}

#[tokio::test]
async fn test_reference_table_listing() {
    let server = MockServer::start().await;
    let cli = Cli::new(&server);
    cli.seed("T1", Some("R1"));

    Mock::given(method("GET"))
        .and(path(p("/reference/communes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": "c1", "name": "Cocody", "is_active": true },
            { "id": "c2", "name": "Yopougon", "is_active": false }
        ]))))
        .mount(&server)
        .await;

    let args = ["reference", "communes"];
    let out = success(&cli.run(&args).await, &args);

    assert!(out.contains("Cocody"));
    assert!(out.contains("Yopougon"));
    assert!(out.contains("inactive"));

    let json = stdout(&cli.run(&["reference", "communes", "--json"]).await);
    let entries: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.as_array().map(Vec::len), Some(2));
}
