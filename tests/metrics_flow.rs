use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;
use sessionwatch::connectors::MetricsClient;
use sessionwatch::monitoring::active_sessions;
use sessionwatch::report::render_sessions_table;
use sessionwatch::watch::poll_sessions;

fn client_for(server: &mockito::Server) -> MetricsClient {
    MetricsClient::new(&server.url(), Duration::from_secs(5)).unwrap()
}

// Full poll-filter-render path against a mocked backend.
#[tokio::test]
async fn poll_filter_and_render_active_sessions() {
    let mut server = mockito::Server::new_async().await;
    let body = json!([
        {
            "sessionId": "8f14e45f-ceea-4340-9b2e-111111111111",
            "busNumber": "C5",
            "direction": "Northbound",
            "connectedAt": "2025-06-01T09:30:00",
            "disconnectedAt": null
        },
        {
            "sessionId": "aa93ab12-0000-4340-9b2e-222222222222",
            "busNumber": "C5",
            "direction": "Southbound",
            "connectedAt": "2025-06-01T09:10:00",
            "disconnectedAt": "2025-06-01T09:25:30"
        },
        {
            "sessionId": "bc01cd34-1111-4340-9b2e-333333333333",
            "busNumber": "42",
            "direction": "Southbound",
            "connectedAt": "2025-06-01T09:32:10",
            "disconnectedAt": null
        }
    ]);
    let mock = server
        .mock("GET", "/api/metrics/sessions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let sessions = poll_sessions(&client_for(&server)).await;
    mock.assert_async().await;
    assert_eq!(sessions.len(), 3);

    let active = active_sessions(&sessions);
    assert_eq!(active.len(), 2);

    let now = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(9, 33, 25)
        .unwrap();
    let rendered = render_sessions_table(&active, now).to_string();

    assert!(rendered.contains("8f14e45f..."));
    assert!(rendered.contains("bc01cd34..."));
    // The disconnected record must not appear
    assert!(!rendered.contains("aa93ab12"));
    assert!(rendered.contains("3m 25s"));
    assert!(rendered.contains("1m 15s"));
}

// A failing backend degrades to an empty list instead of aborting the run.
#[tokio::test]
async fn poll_degrades_to_empty_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/metrics/sessions")
        .with_status(503)
        .create_async()
        .await;

    let sessions = poll_sessions(&client_for(&server)).await;
    mock.assert_async().await;
    assert!(sessions.is_empty());
}

// Connection refused (no server at all) takes the same degrade path.
#[tokio::test]
async fn poll_degrades_to_empty_when_unreachable() {
    let client = MetricsClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let sessions = poll_sessions(&client).await;
    assert!(sessions.is_empty());
}

#[tokio::test]
async fn cleanup_probe_reports_active_count() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "status": "info",
        "message": "Found 2 active sessions",
        "note": "Sessions should be cleaned up automatically when WebSocket connections close properly",
        "issue": "If sessions persist, the WebSocket connections are not being closed from the client",
        "active_sessions": 2
    });
    let mock = server
        .mock("POST", "/api/metrics/cleanup-sessions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let report = client_for(&server).trigger_cleanup().await.unwrap();
    mock.assert_async().await;

    assert_eq!(report.status, "info");
    assert_eq!(report.active_sessions, 2);
    assert!(report.message.contains("2 active"));
}

#[tokio::test]
async fn health_endpoint_round_trips() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "status": "healthy",
        "active_sessions": 0,
        "total_buses_tracked": 12,
        "total_broadcasts": 340
    });
    let mock = server
        .mock("GET", "/api/metrics/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let health = client_for(&server).health().await.unwrap();
    mock.assert_async().await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["total_buses_tracked"], 12);
}
