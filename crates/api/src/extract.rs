//! Request extractors with the application's error shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` whose rejection is an [`AppError::BadRequest`], so malformed
/// bodies answer with the usual `{"error", "code"}` JSON.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose rejection is an [`AppError::BadRequest`], so
/// an unparsable id answers with JSON rather than plain text.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
