//! Copy status endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{models::InstanceStatus, sanitize::escape_html};

/// One copy's availability, ready for display. Both fields are HTML-escaped
/// even though the payload is JSON.
#[derive(Serialize, ToSchema)]
pub struct BookStatusEntry {
    /// Book title
    pub title: String,
    /// Status label ("Available", "Loaned", "Maintenance", "Reserved")
    pub status: String,
}

/// List the availability status of every book copy.
///
/// Entries come back in the order the copies were added to the store. An
/// empty collection is a 200 with an empty array, not an error.
#[utoipa::path(
    get,
    path = "/books/status",
    tag = "books",
    responses(
        (status = 200, description = "Status of every copy, in insertion order", body = Vec<BookStatusEntry>),
        (status = 500, description = "Statuses could not be read")
    )
)]
pub async fn book_statuses(State(state): State<crate::AppState>) -> Response {
    match state.services.catalog.book_statuses().await {
        Ok(entries) => {
            let sanitized: Vec<BookStatusEntry> = entries
                .into_iter()
                .map(|entry| BookStatusEntry {
                    title: escape_html(&entry.title),
                    status: escape_html(&InstanceStatus::from(entry.status).to_string()),
                })
                .collect();
            Json(sanitized).into_response()
        }
        Err(err) => {
            tracing::error!("Error reading book statuses: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Status not found").into_response()
        }
    }
}
