//! HTTP response building module
//!
//! Builders for the three responses the combiner produces, decoupled from
//! the resolution and read logic. Every builder returns a complete response;
//! construction failures fall back to a bare response rather than panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the 200 response carrying a combined payload.
///
/// The Content-Type is the one resolved from the first filename; the whole
/// payload goes out in a single body write. HEAD requests get the same
/// headers with an empty body.
pub fn build_combined_response(
    payload: Vec<u8>,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = payload.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(payload)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 400 Bad Request response with a plain-text diagnostic.
pub fn build_400_response(diagnostic: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(diagnostic.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::from("400 Bad Request")))
        })
}

/// Build a 404 Not Found response whose body is the read-failure message.
pub fn build_404_response(diagnostic: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(diagnostic.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
