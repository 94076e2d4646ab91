//! API Integration Tests
//!
//! These tests require:
//! - Running MySQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use cms_common::JwtService;
use cms_core::permission_values as pv;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_returns_decodable_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[pv::VIEW_DASHBOARD])
        .await
        .unwrap();

    let response = server
        .post("/api/users/login", &account.login_request())
        .await
        .unwrap();
    let body: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user.id, account.user_id);
    assert_eq!(body.user.group_id, Some(account.group_id));
    assert_eq!(body.permissions.len(), 1);
    assert_eq!(body.permissions[0].value, pv::VIEW_DASHBOARD);

    let config = &server.state.config().jwt;
    let claims = JwtService::new(&config.secret, config.expiry_seconds)
        .decode_token(&body.token)
        .unwrap();
    assert_eq!(claims.user_id, account.user_id);
}

#[tokio::test]
async fn test_login_failures() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[]).await.unwrap();

    let wrong_password = LoginRequest {
        email: account.email.clone(),
        password: "yanlis-sifre".to_string(),
    };
    let response = server.post("/api/users/login", &wrong_password).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let unknown = LoginRequest {
        email: format!("yok{}@kanal.example", unique_suffix()),
        password: "Deneme123!".to_string(),
    };
    let response = server.post("/api/users/login", &unknown).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_me_and_missing_permission() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[]).await.unwrap();
    let token = login(&server, &account).await.unwrap();

    let response = server.get_auth("/api/users/me", &token).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["user"]["email"], account.email.as_str());
    assert_eq!(me["permissions"], json!([]));

    let response = server.get_auth("/api/panel/dashboard", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"]["title"], "Hata");
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut account = seed_account(&server.state, &[]).await.unwrap();
    let token = login(&server, &account).await.unwrap();

    let response = server
        .put_auth(
            "/api/panel/settings/user/password/update",
            &token,
            &json!({ "oldPassword": "yanlis", "newPassword": "YeniSifre1" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_auth(
            "/api/panel/settings/user/password/update",
            &token,
            &json!({ "oldPassword": account.password, "newPassword": "YeniSifre1" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    account.password = "YeniSifre1".to_string();
    login(&server, &account).await.unwrap();
}

// ============================================================================
// Program Tests
// ============================================================================

#[tokio::test]
async fn test_program_add_get_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[pv::EDIT_PROGRAMS]).await.unwrap();
    let token = login(&server, &account).await.unwrap();

    let program = program_body();
    let response = server
        .post_auth("/api/panel/pages/programs/add", &token, &program)
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created["success"], true);
    let id = created["id"].as_i64().unwrap();

    let response = server
        .get(&format!("/api/panel/pages/programs/{id}"))
        .await
        .unwrap();
    let fetched: Value = assert_json(response, StatusCode::OK).await.unwrap();
    for field in ["title", "subtitle", "description", "presenter", "broadcast_day", "broadcast_time", "image", "category"] {
        assert_eq!(fetched["program"][field], program[field], "{field}");
    }
    assert_eq!(fetched["program"]["is_active"], 1);

    let response = server
        .delete_auth(&format!("/api/panel/pages/programs/delete/{id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/panel/pages/programs").await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = list["programs"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_i64())
        .collect();
    assert!(!ids.contains(&id));

    let response = server
        .get(&format!("/api/panel/pages/programs/{id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_program_batch_update_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[pv::EDIT_PROGRAMS]).await.unwrap();
    let token = login(&server, &account).await.unwrap();

    let response = server
        .post_auth("/api/panel/pages/programs/add", &token, &program_body())
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let batch = json!({ "programs": [
        { "id": id, "title": "Güncel Başlık", "is_active": "0" },
    ]});
    let response = server
        .put_auth("/api/panel/pages/programs/update", &token, &batch)
        .await
        .unwrap();
    let report: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(report["updated"], 1);
    assert_eq!(report["failed"], 0);

    let response = server
        .get(&format!("/api/panel/pages/programs/{id}"))
        .await
        .unwrap();
    let fetched: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched["program"]["title"], "Güncel Başlık");
    assert_eq!(fetched["program"]["is_active"], 0);

    server
        .delete_auth(&format!("/api/panel/pages/programs/delete/{id}"), &token)
        .await
        .unwrap();
}

// ============================================================================
// Schedule Tests
// ============================================================================

#[tokio::test]
async fn test_schedule_replaces_a_day() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[pv::EDIT_SCHEDULE]).await.unwrap();
    let token = login(&server, &account).await.unwrap();

    // Something to replace
    let before = schedule_body(
        "Pazartesi",
        json!([
            { "time": "07:00", "program": "Sabah Kuşağı" },
            { "time": "12:30", "program": "Öğle Haberleri" },
        ]),
    );
    let response = server
        .put_auth("/api/panel/pages/yayin-akisi/update", &token, &before)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let after = schedule_body("Pazartesi", json!([{ "time": "09:00", "program": "Haber" }]));
    let response = server
        .put_auth("/api/panel/pages/yayin-akisi/update", &token, &after)
        .await
        .unwrap();
    let report: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(report["success"], true);

    let response = server.get("/api/panel/pages/yayin-akisi").await.unwrap();
    let schedule: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let monday = schedule["scheduleItems"]["Pazartesi"].as_array().unwrap();
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0]["time"], "09:00");
    assert_eq!(monday[0]["program"], "Haber");
    assert!(monday[0]["id"].as_i64().unwrap() > 0);

    // The panel resubmits what it loaded, ids included; nothing changes
    let resubmit = schedule_body("Pazartesi", Value::Array(monday.clone()));
    let response = server
        .put_auth("/api/panel/pages/yayin-akisi/update", &token, &resubmit)
        .await
        .unwrap();
    let report: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(report["inserted"], 0);
    assert_eq!(report["updated"], 1);
    assert_eq!(report["deleted"], 0);

    let response = server.get("/api/panel/pages/yayin-akisi").await.unwrap();
    let again: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(again["scheduleItems"]["Pazartesi"], schedule["scheduleItems"]["Pazartesi"]);
}

#[tokio::test]
async fn test_schedule_rejects_unknown_day() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[pv::EDIT_SCHEDULE]).await.unwrap();
    let token = login(&server, &account).await.unwrap();

    let body = schedule_body("Funday", json!([{ "time": "09:00", "program": "Haber" }]));
    let response = server
        .put_auth("/api/panel/pages/yayin-akisi/update", &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Group Permission Tests
// ============================================================================

#[tokio::test]
async fn test_permission_replace_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = seed_account(&server.state, &[pv::VIEW_GROUP, pv::MANAGE_GROUP_PERMISSIONS])
        .await
        .unwrap();
    let target = seed_account(&server.state, &[]).await.unwrap();
    let token = login(&server, &admin).await.unwrap();

    let catalog: Vec<i64> = server
        .state
        .service_context()
        .permission_repo()
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.value == pv::EDIT_HOME || p.value == pv::EDIT_PRESS)
        .map(|p| p.id)
        .collect();
    let permissions: Vec<Value> = catalog.iter().map(|id| json!({ "id": id })).collect();
    let body = json!({ "groupId": target.group_id, "permissions": permissions });

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let response = server
            .put_auth("/api/panel/users/groups/permissions/update", &token, &body)
            .await
            .unwrap();
        let result: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(result["affectsCurrentUser"], false);

        let response = server.get_auth("/api/panel/users/groups", &token).await.unwrap();
        let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
        let group = page["groups"]
            .as_array()
            .unwrap()
            .iter()
            .find(|g| g["id"].as_i64() == Some(target.group_id))
            .cloned()
            .unwrap();
        snapshots.push(group["permissions"].clone());
    }

    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[0].as_array().unwrap().len(), 2);
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_stores_under_destination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let account = seed_account(&server.state, &[pv::UPLOAD_FILES]).await.unwrap();
    let token = login(&server, &account).await.unwrap();

    let response = server
        .upload("/api/upload?destination=itest", &token, "afis.png", b"PNGDATA".to_vec())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let file_path = body["filePath"].as_str().unwrap().to_string();
    assert!(file_path.starts_with("/itest/"));
    assert!(file_path.ends_with(".png"));
    assert_eq!(body["originalName"], "afis.png");

    // Served back from the public root
    let response = server.get(&file_path).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"PNGDATA");

    let response = server
        .upload("/api/upload?destination=../etc", &token, "x.txt", b"x".to_vec())
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
