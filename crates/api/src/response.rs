//! Response types for the embed surface.
//!
//! The delivery contract: an embed response body must always parse and
//! execute as JavaScript on an arbitrary third-party page, whatever failed
//! upstream. [`ScriptResponse`] centralizes the content type and caching
//! headers so no handler can get them wrong.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// An executable-JavaScript response.
///
/// Always `text/javascript` and `Cache-Control: no-cache` — admin edits
/// must be visible on the next page load, for every widget variant.
#[derive(Debug)]
pub struct ScriptResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ScriptResponse {
    /// A successful script delivery.
    pub fn ok(body: String) -> Self {
        ScriptResponse {
            status: StatusCode::OK,
            body,
        }
    }

    /// A script delivery with an explicit status (the body must still be
    /// valid JS; browsers execute 4xx/5xx script bodies' error handling
    /// aside, the status is for the embedding developer's network tab).
    pub fn with_status(status: StatusCode, body: String) -> Self {
        ScriptResponse { status, body }
    }
}

impl IntoResponse for ScriptResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/javascript; charset=utf-8"),
                ),
                (
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                ),
            ],
            self.body,
        )
            .into_response()
    }
}

/// Standard `{ "data": T }` envelope for the JSON endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
