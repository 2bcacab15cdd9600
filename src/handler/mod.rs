//! Request handler module
//!
//! Orchestrates one request: resolve the target into a file list, combine
//! the files, turn the result into exactly one HTTP response. Every code
//! path is terminal; nothing is retried.

use crate::combine;
use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = std::time::Instant::now();
    let method = req.method().clone();
    let is_head = method == Method::HEAD;

    // The `??` marker begins with a question mark, so hyper parses the
    // filename list as the query string. Resolution needs the raw
    // path-and-query text, not `uri.path()`.
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), |pq| pq.as_str().to_string());

    let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), target.clone());
    entry.http_version = format!("{:?}", req.version())
        .trim_start_matches("HTTP/")
        .to_string();
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry.referer = req
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let response = serve_combined(&target, is_head, &state).await;

    if state.config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get("Content-Length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve and combine one request target into a response.
///
/// Pure with respect to the transport: takes the raw target string so the
/// whole pipeline is testable without constructing hyper requests.
pub async fn serve_combined(
    target: &str,
    is_head: bool,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let descriptor = match combine::parse_request_target(target, &state.root) {
        Ok(d) => d,
        Err(err) => {
            logger::log_warning(&err.to_string());
            return http::build_400_response(&err.to_string());
        }
    };

    match combine::combine_files(&descriptor.file_paths).await {
        Ok(payload) => http::build_combined_response(payload, descriptor.mime, is_head),
        Err(err) => {
            logger::log_error(&err.to_string());
            http::build_404_response(&err.to_string())
        }
    }
}
