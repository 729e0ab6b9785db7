//! Book creation endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::BookDetails,
    sanitize::escape_html,
    validation::ValidatedBody,
    ErrorKind,
};

/// Confirmation payload for a created book. Every field is HTML-escaped.
#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    /// Title of the new book
    pub title: String,
    /// Author as "first family"
    pub author: String,
    /// Genre name
    pub genre: String,
}

/// Create a book for an existing author and genre.
///
/// The body may be JSON or URL-encoded; validation rejects malformed input
/// with 400 before any store access. A missing author or genre yields 404,
/// a store failure 500 — both with the same plain-text body, so nothing
/// about the store leaks to the client.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookDetails,
    responses(
        (status = 200, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Invalid input", body = crate::validation::ValidationErrorResponse),
        (status = 404, description = "Referenced author or genre does not exist"),
        (status = 500, description = "Book could not be created")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ValidatedBody(details): ValidatedBody<BookDetails>,
) -> Response {
    match state.services.catalog.create_book(&details).await {
        Ok(book) => {
            tracing::info!("Created book id={} title={:?}", book.id, book.title);
            Json(BookCreatedResponse {
                title: escape_html(&book.title),
                author: escape_html(&format!(
                    "{} {}",
                    details.first_name, details.family_name
                )),
                genre: escape_html(&details.genre_name),
            })
            .into_response()
        }
        Err(err) => {
            tracing::error!("Error creating book: {}", err);
            let status = match err.kind() {
                ErrorKind::Resolution => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                format!("Error creating book: {}", escape_html(&details.book_title)),
            )
                .into_response()
        }
    }
}
