//! Shared helpers for gateway integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use axum::{
    extract::Path,
    http::{header::ACCEPT, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};

use starbadge_gateway::config::UpstreamSection;
use starbadge_gateway::upstream::{self, FetchError, Fetched, GithubFetcher, MetricSource};

/// Serve `app` on an ephemeral localhost port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Upstream that answers one request with a `Content-Length` larger than the
/// bytes it writes, then closes the connection mid-body.
pub async fn spawn_truncated() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut req: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            req.extend_from_slice(&buf[..n]);
        }
        sock.write_all(
            b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"stargazers_count\": 1",
        )
        .await
        .unwrap();
        sock.flush().await.unwrap();
    });
    addr
}

/// A localhost address with nothing listening on it.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn upstream_cfg(addr: SocketAddr) -> UpstreamSection {
    UpstreamSection {
        base_url: format!("http://{addr}"),
        timeout_ms: 2000,
        ..UpstreamSection::default()
    }
}

pub fn fetcher_for(addr: SocketAddr) -> GithubFetcher {
    let cfg = upstream_cfg(addr);
    let client = upstream::build_client(&cfg).unwrap();
    GithubFetcher::new(client, &cfg)
}

/// Fake repository API.
///
/// - `octocat/Hello-World`: 10700 stars (only with the v3 Accept header)
/// - `octocat/fractional`: 42.9 stars
/// - `octocat/broken`: malformed JSON
/// - anything else: 404 with GitHub's error document
pub fn mock_upstream() -> Router {
    Router::new().route("/repos/:owner/:name", get(repo_meta))
}

async fn repo_meta(Path((owner, name)): Path<(String, String)>, headers: HeaderMap) -> impl IntoResponse {
    let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok()).unwrap_or("");
    if accept != "application/vnd.github.v3+json" {
        return (StatusCode::NOT_ACCEPTABLE, r#"{"message":"bad accept"}"#.to_string());
    }
    match (owner.as_str(), name.as_str()) {
        ("octocat", "Hello-World") => (
            StatusCode::OK,
            r#"{"id":1296269,"full_name":"octocat/Hello-World","stargazers_count":10700,"forks_count":9}"#
                .to_string(),
        ),
        ("octocat", "fractional") => (StatusCode::OK, r#"{"stargazers_count":42.9}"#.to_string()),
        ("octocat", "broken") => (StatusCode::OK, r#"{"stargazers_count": 12"#.to_string()),
        _ => (
            StatusCode::NOT_FOUND,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#.to_string(),
        ),
    }
}

/// Metric source returning a canned outcome and recording requested repos.
pub struct FakeSource {
    live: Option<u64>,
    pub seen: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn live(n: u64) -> Self {
        Self { live: Some(n), seen: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { live: None, seen: Mutex::new(Vec::new()) }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricSource for FakeSource {
    async fn fetch(&self, repo: &str) -> Fetched {
        self.seen.lock().unwrap().push(repo.to_string());
        match self.live {
            Some(n) => Fetched::Live(n),
            None => Fetched::Fallback(FetchError::MissingField),
        }
    }
}
