//! Response helpers. Records go out bare, without an envelope.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Human-readable confirmation, e.g. after a delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 201 with an empty body; `Location` points at the new record.
pub fn created_at(location: String) -> impl IntoResponse {
    (StatusCode::CREATED, [(header::LOCATION, location)])
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn message(text: impl Into<String>) -> (StatusCode, Json<Message>) {
    (
        StatusCode::OK,
        Json(Message {
            message: text.into(),
        }),
    )
}
