//! HTTP response building module
//!
//! Builders for the responses the asset server emits: an empty-body
//! status response for failures and a streamed file response for hits.

use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};
use tokio::fs::File;

use super::body::{self, RespBody};

/// Build a response with the given status and no body
pub fn build_empty_response(status: StatusCode) -> Response<RespBody> {
    Response::builder()
        .status(status)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            fallback_response(status)
        })
}

/// Build 200 response streaming `file`
///
/// `content_length` must be the size observed when the file was looked up.
pub fn build_file_response(
    file: File,
    content_length: u64,
    content_type: Option<&str>,
) -> Response<RespBody> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_LENGTH, content_length);

    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }

    builder.body(body::file_stream(file)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        fallback_response(StatusCode::INTERNAL_SERVER_ERROR)
    })
}

fn fallback_response(status: StatusCode) -> Response<RespBody> {
    let mut response = Response::new(body::empty());
    *response.status_mut() = status;
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
