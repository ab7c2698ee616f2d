//! Shared mock deployment for integration tests.
//!
//! Stands in for the external system under test: a service endpoint that
//! reports its serving pool, and a chaos-control endpoint that flips a
//! shared fault flag. No routing logic lives here; each test scripts the
//! responses it needs through a closure over the shared state.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use failover_verify::config::VerifyConfig;

/// Shared state between the mock chaos endpoint and the test's service script.
#[derive(Debug, Default)]
pub struct ChaosState {
    /// True between /chaos/start and /chaos/stop.
    pub active: AtomicBool,
    /// Number of start requests observed.
    pub starts: AtomicUsize,
    /// Number of stop requests observed.
    pub stops: AtomicUsize,
}

impl ChaosState {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a mock service whose per-request status and pool label come from
/// the supplied closure. Responses carry both the `X-App-Pool` header and a
/// JSON body with a `pool` field, like the real version endpoint.
pub async fn start_mock_service<F>(addr: SocketAddr, script: F)
where
    F: Fn() -> (u16, &'static str) + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let script = Arc::new(script);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let script = script.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 2048];
                        let _ = socket.read(&mut buf).await;

                        let (status, pool) = script();
                        let body = format!("{{\"version\":\"1.0.0\",\"pool\":\"{}\"}}", pool);
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nX-App-Pool: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
                            pool,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a mock chaos-control endpoint that flips the shared fault flag on
/// `POST /chaos/start` and `/chaos/stop`, counting both.
pub async fn start_mock_chaos(addr: SocketAddr, state: Arc<ChaosState>) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let state = state.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 2048];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]);

                        let (status, body) = if request.starts_with("POST /chaos/start") {
                            state.active.store(true, Ordering::SeqCst);
                            state.starts.fetch_add(1, Ordering::SeqCst);
                            (200, "chaos started")
                        } else if request.starts_with("POST /chaos/stop") {
                            state.active.store(false, Ordering::SeqCst);
                            state.stops.fetch_add(1, Ordering::SeqCst);
                            (200, "chaos stopped")
                        } else {
                            (404, "unknown chaos action")
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Config pointed at the mocks with all pacing zeroed for fast tests.
pub fn fast_config(service: SocketAddr, chaos: SocketAddr) -> VerifyConfig {
    let mut config = VerifyConfig::default();
    config.endpoints.service_url = format!("http://{}", service);
    config.endpoints.chaos_url = format!("http://{}", chaos);
    config.baseline.interval_ms = 0;
    config.failover.interval_ms = 0;
    config.failover.settle_ms = 0;
    config.recovery.interval_ms = 0;
    config.recovery.settle_ms = 0;
    config
}
