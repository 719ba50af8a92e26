// Extractors whose rejections use the API's JSON error body

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::LaunchpadError;

/// `axum::Json` that rejects malformed bodies with a 400 `{"error": ...}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(LaunchpadError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with the same rejection shape
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(LaunchpadError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path`, so `/startups/abc` is answered in JSON as well
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(LaunchpadError))]
pub struct ApiPath<T>(pub T);
