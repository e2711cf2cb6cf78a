use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, Notify};
use tower::ServiceExt;

use txn_tracker_backend::app::create_app;
use txn_tracker_backend::models::Transaction;
use txn_tracker_backend::repository::TransactionRepository;
use txn_tracker_backend::server::{serve, ServeError};
use txn_tracker_backend::services::TransactionService;
use txn_tracker_backend::state::AppState;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Listing blocks for `delay`; records whether storage was closed.
struct SlowRepository {
    delay: Duration,
    started: Notify,
    closed: AtomicBool,
}

impl SlowRepository {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: Notify::new(),
            closed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl TransactionRepository for SlowRepository {
    async fn find_all(&self) -> Result<Vec<Transaction>, sqlx::Error> {
        self.started.notify_one();
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Transaction>, sqlx::Error> {
        Ok(None)
    }

    async fn add(&self, _txn: &mut Transaction) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn edit(&self, _txn: &Transaction) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn delete(&self, _id: i32) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

async fn raw_get(addr: SocketAddr, path: &str) -> std::io::Result<String> {
    let mut stream = TcpStream::connect(addr).await?;
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        path
    );
    stream.write_all(request.as_bytes()).await?;
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[tokio::test]
async fn test_slow_request_times_out_with_error_envelope() -> TestResult {
    let repo = Arc::new(SlowRepository::new(Duration::from_secs(2)));
    let app = create_app(
        AppState::new(TransactionService::new(repo)),
        Duration::from_millis(50),
    );

    let response = app
        .oneshot(Request::builder().uri("/api/txn").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: Value = serde_json::from_slice(&body)?;
    assert!(json["error"].as_str().unwrap().contains("timed out"));
    Ok(())
}

#[tokio::test]
async fn test_shutdown_drains_in_flight_request_then_closes_storage() -> TestResult {
    let repo = Arc::new(SlowRepository::new(Duration::from_millis(200)));
    let service = TransactionService::new(repo.clone());
    let app = create_app(AppState::new(service.clone()), Duration::from_secs(10));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, app, service, Duration::from_secs(5), async move {
        let _ = stop_rx.await;
    }));

    let request = tokio::spawn(raw_get(addr, "/api/txn"));
    repo.started.notified().await;
    assert!(stop_tx.send(()).is_ok());

    let response = request.await??;
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.contains(r#"{"transactions":[]}"#));

    server.await??;
    assert!(repo.closed.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn test_shutdown_fails_when_request_outlives_grace_period() -> TestResult {
    let repo = Arc::new(SlowRepository::new(Duration::from_secs(10)));
    let service = TransactionService::new(repo.clone());
    let app = create_app(AppState::new(service.clone()), Duration::from_secs(30));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let grace = Duration::from_millis(100);
    let server = tokio::spawn(serve(listener, app, service, grace, async move {
        let _ = stop_rx.await;
    }));

    let request = tokio::spawn(raw_get(addr, "/api/txn"));
    repo.started.notified().await;
    assert!(stop_tx.send(()).is_ok());

    let result = tokio::time::timeout(Duration::from_secs(5), server).await??;
    assert!(matches!(result, Err(ServeError::GraceExceeded(g)) if g == grace));
    assert!(!repo.closed.load(Ordering::SeqCst));

    request.abort();
    Ok(())
}

#[tokio::test]
async fn test_server_stops_immediately_when_idle() -> TestResult {
    let repo = Arc::new(SlowRepository::new(Duration::from_millis(10)));
    let service = TransactionService::new(repo.clone());
    let app = create_app(AppState::new(service.clone()), Duration::from_secs(1));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    serve(listener, app, service, Duration::from_secs(5), async {}).await?;

    assert!(repo.closed.load(Ordering::SeqCst));
    Ok(())
}
