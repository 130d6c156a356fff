//! Request entry point
//!
//! Every request, whatever its method, is treated as a read of the asset
//! at its path. This layer only adds access logging around the responder.

use hyper::header::{HeaderName, CONTENT_LENGTH, REFERER, USER_AGENT};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::http::RespBody;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<RespBody>, Infallible> {
    let started = Instant::now();
    let response = state.responder.respond(req.uri().path()).await;

    let logging = &state.config.logging;
    if logging.access_log {
        let entry = access_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &logging.access_log_format);
    }

    Ok(response)
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<RespBody>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssetsConfig, Config};
    use http_body_util::BodyExt;
    use hyper::{Method, StatusCode};

    fn state_with_root(root: &str) -> Arc<AppState> {
        let config = Config {
            assets: AssetsConfig::new(root),
            ..Config::default()
        };
        Arc::new(AppState::new(config))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().unwrap()
    }

    #[tokio::test]
    async fn test_any_method_is_a_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<h1>Hi</h1>\n").unwrap();
        let state = state_with_root(dir.path().to_str().unwrap());

        for method in [Method::GET, Method::POST, Method::DELETE] {
            let req = Request::builder()
                .method(method)
                .uri("/?ignored=1")
                .body(())
                .unwrap();
            let response = handle_request(req, Arc::clone(&state), peer())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(bytes.as_ref(), b"<h1>Hi</h1>\n");
        }
    }

    #[tokio::test]
    async fn test_access_entry_fields() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with_root(dir.path().to_str().unwrap());

        let req = Request::builder()
            .uri("/missing.png?x=1")
            .version(Version::HTTP_10)
            .header(USER_AGENT, "curl/8.0")
            .body(())
            .unwrap();
        let response = state.responder.respond(req.uri().path()).await;
        let entry = access_entry(&req, &response, peer(), Instant::now());

        assert_eq!(entry.remote_addr, "127.0.0.1");
        assert_eq!(entry.method, "GET");
        assert_eq!(entry.path, "/missing.png");
        assert_eq!(entry.query.as_deref(), Some("x=1"));
        assert_eq!(entry.http_version, "1.0");
        assert_eq!(entry.status, 404);
        assert_eq!(entry.body_bytes, 0);
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.0"));
        assert!(entry.referer.is_none());
    }
}
