//! Request extractors

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections render through [`AppError`], so malformed
/// bodies get the usual `{"error": ...}` envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
