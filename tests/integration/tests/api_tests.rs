//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, unique_suffix, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn register(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_root("/health/live").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.reminder_type, "push");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server.post("/auth/register", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_password_mismatch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.confirm_password = "Different123!".to_string();

    let response = server.post("/auth/register", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Passwords don't match");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token_rotates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    let tokens: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!tokens.access_token.is_empty());
    assert_ne!(tokens.refresh_token, auth.refresh_token);

    // The old refresh token was revoked by the rotation
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server
        .post_auth(
            "/auth/logout",
            &auth.access_token,
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_without_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server
        .post_empty_auth("/auth/logout", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    let response = server.get_auth("/users/@me", &auth.access_token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, request.email);
    assert_eq!(user.age, 30);
    assert_eq!(user.gender, "female");
}

#[tokio::test]
async fn test_get_current_user_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/users/@me", "not-a-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_keeps_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    let response = server
        .patch_auth(
            "/users/@me",
            &auth.access_token,
            &json!({ "age": 31, "address": "12 Clinic Road" }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.age, 31);
    assert_eq!(user.address.as_deref(), Some("12 Clinic Road"));
    assert_eq!(user.email, request.email);
    assert_eq!(user.username, request.username);
}

#[tokio::test]
async fn test_reminder_settings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    let response = server
        .get_auth("/users/@me/reminder-settings", &auth.access_token)
        .await
        .unwrap();
    let settings: ReminderSettings = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(settings.reminder_type, "push");
    assert_eq!(settings.email, request.email);

    let update = ReminderSettings {
        reminder_type: "email".to_string(),
        email: "reminders@example.com".to_string(),
    };
    let response = server
        .put_auth("/users/@me/reminder-settings", &auth.access_token, &update)
        .await
        .unwrap();
    let settings: ReminderSettings = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(settings.reminder_type, "email");
    assert_eq!(settings.email, "reminders@example.com");
}

#[tokio::test]
async fn test_reminder_settings_rejects_bad_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let update = ReminderSettings {
        reminder_type: "email".to_string(),
        email: "not-an-email".to_string(),
    };
    let response = server
        .put_auth("/users/@me/reminder-settings", &auth.access_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Vaccination Record Tests
// ============================================================================

#[tokio::test]
async fn test_new_user_has_empty_record() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server
        .get_auth("/users/@me/vaccinations", &auth.access_token)
        .await
        .unwrap();
    let record: RecordResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(record.is_empty());
}

#[tokio::test]
async fn test_check_and_uncheck_doses() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let token = &auth.access_token;

    for index in 0..3 {
        let path = format!("/users/@me/vaccinations/HepB/doses/{index}");
        let response = server.put_empty_auth(&path, token).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get_auth("/users/@me/vaccinations", token).await.unwrap();
    let record: RecordResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(record["HepB"].taken, 3);

    // Earlier doses are locked while later ones are recorded
    let response = server
        .put_empty_auth("/users/@me/vaccinations/HepB/doses/0", token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "DOSE_LOCKED");

    // Unchecking dose 1 also clears dose 2
    let response = server
        .delete_auth("/users/@me/vaccinations/HepB/doses/1", token)
        .await
        .unwrap();
    let record: RecordResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(record["HepB"].taken, 1);
    assert_eq!(record["HepB"].doses.len(), 1);
}

#[tokio::test]
async fn test_check_dose_out_of_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server
        .put_empty_auth("/users/@me/vaccinations/HepB/doses/2", &auth.access_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "DOSE_OUT_OF_ORDER");

    let response = server
        .put_empty_auth("/users/@me/vaccinations/HepB/doses/3", &auth.access_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "DOSE_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_check_dose_unknown_vaccine() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server
        .put_empty_auth("/users/@me/vaccinations/Nope/doses/0", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_import_accepts_both_timestamp_shapes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let body = json!({
        "vaccinations": {
            "BCG": { "0": "2024-01-15T09:30:00Z" },
            "OPV": { "0": { "seconds": 1_705_311_000, "nanoseconds": 0 } },
            "Unknown": { "0": "2024-01-15T09:30:00Z" }
        }
    });
    let response = server
        .put_auth("/users/@me/vaccinations", &auth.access_token, &body)
        .await
        .unwrap();
    let record: RecordResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(record.len(), 2);
    assert_eq!(record["BCG"].taken, 1);
    assert_eq!(record["OPV"].taken, 1);
}

// ============================================================================
// Schedule and Reminder Tests
// ============================================================================

#[tokio::test]
async fn test_upcoming_doses_emit_reminder_once() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let token = &auth.access_token;

    // HepB dose 2 falls due in ten and a half days
    let first_dose = Utc::now() - ChronoDuration::days(20) + ChronoDuration::hours(12);
    let import = ImportRequest::single_dose("HepB", json!(first_dose.to_rfc3339()));
    let response = server
        .put_auth("/users/@me/vaccinations", token, &import)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    for _ in 0..2 {
        let response = server.get_auth("/users/@me/upcoming-doses", token).await.unwrap();
        let upcoming: Vec<UpcomingDoseResponse> =
            assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].vaccine_id, "HepB");
        assert_eq!(upcoming[0].dose_number, 2);
    }

    let response = server.get_auth("/users/@me/notifications", token).await.unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Vaccine Reminder");
    assert!(notifications[0].message.contains("due in 10 days"));
    assert!(!notifications[0].read);
}

#[tokio::test]
async fn test_mark_notification_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register(&server).await;
    let (_, stranger) = register(&server).await;

    let first_dose = Utc::now() - ChronoDuration::days(20) + ChronoDuration::hours(12);
    let import = ImportRequest::single_dose("HepB", json!(first_dose.to_rfc3339()));
    server
        .put_auth("/users/@me/vaccinations", &owner.access_token, &import)
        .await
        .unwrap();
    server
        .get_auth("/users/@me/upcoming-doses", &owner.access_token)
        .await
        .unwrap();

    let response = server
        .get_auth("/users/@me/notifications", &owner.access_token)
        .await
        .unwrap();
    let notifications: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let path = format!("/users/@me/notifications/{}/read", notifications[0].id);

    let response = server
        .patch_empty_auth(&path, &stranger.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.patch_empty_auth(&path, &owner.access_token).await.unwrap();
    let notification: NotificationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(notification.read);
}

#[tokio::test]
async fn test_notification_stream_receives_own_events() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let mut stream = server
        .client
        .get(server.api_url("/users/@me/notifications/stream"))
        .header("Authorization", format!("Bearer {}", auth.access_token))
        .send()
        .await
        .unwrap();
    assert_eq!(stream.status(), StatusCode::OK);

    // Give the pattern subscription time to attach
    tokio::time::sleep(Duration::from_millis(300)).await;
    server
        .put_empty_auth("/users/@me/vaccinations/BCG/doses/0", &auth.access_token)
        .await
        .unwrap();

    let chunk = tokio::time::timeout(Duration::from_secs(5), stream.chunk())
        .await
        .expect("No event within timeout")
        .unwrap()
        .expect("Stream ended");
    let text = String::from_utf8_lossy(&chunk);
    assert!(text.contains("event: VACCINATION_UPDATED"));
}

// ============================================================================
// Catalog and Community Tests
// ============================================================================

#[tokio::test]
async fn test_vaccine_catalog() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/vaccines").await.unwrap();
    let vaccines: Vec<VaccineResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vaccines.len(), 11);

    let response = server.get("/vaccines/HepB").await.unwrap();
    let hepb: VaccineResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(hepb.name, "Hepatitis B");
    assert_eq!(hepb.doses, 3);
    assert_eq!(hepb.dose_interval_days, Some(30));

    let response = server.get("/vaccines/Nope").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_community_endpoints() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/stats/coverage").await.unwrap();
    let coverage: CoverageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(coverage.overall.rate, 78);
    assert_eq!(coverage.overall.vaccinated, 1_053_375);
    assert!(!coverage.age_groups.is_empty());

    let response = server.get("/community/articles").await.unwrap();
    let articles: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!articles.is_empty());
}

// ============================================================================
// Simulation Tests
// ============================================================================

#[tokio::test]
async fn test_risk_simulation_without_recommender() {
    if !check_test_env().await || std::env::var("RECOMMENDATION_URL").is_ok() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/simulations/risk", &json!({ "immunity": 78 }))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(error.error.message, "Failed to get recommendation from AI.");
}

#[tokio::test]
async fn test_risk_simulation_rejects_bad_input() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/simulations/risk", &json!({ "immunity": 150 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Feedback Tests
// ============================================================================

#[tokio::test]
async fn test_feedback_rate_limited_per_ip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let suffix = unique_suffix();
    let ip = format!("10.{}.{}.{}", (suffix >> 16) % 256, (suffix >> 8) % 256, suffix % 256);

    let response = server
        .post_from("/feedback", &ip, &FeedbackRequest::valid())
        .await
        .unwrap();
    let thanks: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(thanks.message, "Thank you for your feedback!");

    let response = server
        .post_from("/feedback", &ip, &FeedbackRequest::valid())
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::TOO_MANY_REQUESTS).await.unwrap();
    assert_eq!(
        error.error.message,
        "You have already submitted feedback recently. Please try again later."
    );
}

#[tokio::test]
async fn test_feedback_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = FeedbackRequest {
        name: "A".to_string(),
        ..FeedbackRequest::valid()
    };

    let response = server.post("/feedback", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Name must be at least 2 characters.");
}
