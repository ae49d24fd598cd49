use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{http::StatusCode, routing::get, Router};
use chrono::{TimeZone, Utc};

use db_clock::api::{create_router, AppState};
use db_clock::database::{Database, NowRow, TimeSource};
use db_clock::display::{DisplayClient, NowDisplay};
use db_clock::errors::ClockError;

struct FixedTime(Vec<NowRow>);

#[async_trait]
impl TimeSource for FixedTime {
    async fn current_time(&self) -> Result<Vec<NowRow>, ClockError> {
        Ok(self.0.clone())
    }
}

/// Serve `app` on an ephemeral local port
async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, path: &str) -> DisplayClient {
    DisplayClient::new(&format!("http://{}{}", addr, path)).unwrap()
}

#[tokio::test]
async fn displays_first_row_now() {
    let first = NowRow {
        now: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
    };
    let second = NowRow {
        now: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
    };
    let expected = serde_json::to_value(&first).unwrap()["now"]
        .as_str()
        .unwrap()
        .to_string();

    let app = create_router(AppState::new(Arc::new(FixedTime(vec![first, second]))));
    let addr = spawn(app).await;

    let mut display = NowDisplay::new();
    display.load(&client_for(addr, "/db")).await;

    assert_eq!(display.now(), Some(expected.as_str()));
    assert_eq!(display.to_string(), format!("now: {}", expected));
}

#[tokio::test]
async fn server_error_leaves_value_unset() {
    let app = create_router(AppState::new(Arc::new(Database::disconnected())));
    let addr = spawn(app).await;
    let client = client_for(addr, "/db");

    assert!(matches!(
        client.fetch_now().await,
        Err(ClockError::UnexpectedStatus(500))
    ));

    let mut display = NowDisplay::new();
    display.load(&client).await;
    assert_eq!(display.now(), None);
    assert_eq!(display.to_string(), "now: ");
}

#[tokio::test]
async fn failed_fetch_keeps_previous_value() {
    let row = NowRow {
        now: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
    };
    let good = spawn(create_router(AppState::new(Arc::new(FixedTime(vec![row]))))).await;
    let bad = spawn(create_router(AppState::new(Arc::new(Database::disconnected())))).await;

    let mut display = NowDisplay::new();
    display.load(&client_for(good, "/db")).await;
    let before = display.clone();
    assert!(before.now().is_some());

    display.load(&client_for(bad, "/db")).await;
    assert_eq!(display, before);
}

#[tokio::test]
async fn empty_array_is_an_error() {
    let app = create_router(AppState::new(Arc::new(FixedTime(Vec::new()))));
    let addr = spawn(app).await;

    assert!(matches!(
        client_for(addr, "/db").fetch_now().await,
        Err(ClockError::EmptyResponse)
    ));
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let app = Router::new().route("/db", get(|| async { (StatusCode::OK, "not json") }));
    let addr = spawn(app).await;

    assert!(matches!(
        client_for(addr, "/db").fetch_now().await,
        Err(ClockError::SerdeError(_))
    ));
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr, "/db").fetch_now().await.unwrap_err();
    assert!(matches!(err, ClockError::HttpClientError(_)));
    // The message carries the underlying cause
    let message = err.to_string();
    assert!(message.starts_with("HTTP client error: "));
    assert!(message.len() > "HTTP client error: ".len());
}
