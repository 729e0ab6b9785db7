//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub genre_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields of a book about to be persisted, with both references resolved
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author_id: i32,
    pub genre_id: i32,
}

/// Create book request.
///
/// All four fields are required; each must be a non-blank single line of
/// printable text. Names and genre are capped at 100 characters, the title
/// at 256. Validation runs on the raw body before any escaping or store
/// access.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    /// Family name of an existing author
    #[validate(
        custom(function = "crate::validation::text_line"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub family_name: String,
    /// First name of an existing author
    #[validate(
        custom(function = "crate::validation::text_line"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub first_name: String,
    /// Name of an existing genre
    #[validate(
        custom(function = "crate::validation::text_line"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub genre_name: String,
    /// Title of the book to create
    #[validate(
        custom(function = "crate::validation::text_line"),
        length(max = 256, message = "must be at most 256 characters")
    )]
    pub book_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> BookDetails {
        BookDetails {
            family_name: "O'Brien".to_string(),
            first_name: "Anne".to_string(),
            genre_name: "Sci-Fi".to_string(),
            book_title: "<b>Dune</b>".to_string(),
        }
    }

    #[test]
    fn test_valid_details_pass() {
        // Markup in the title is a sanitization concern, not a validation one
        assert!(valid_details().validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut details = valid_details();
        details.book_title = "   ".to_string();
        let errors = details.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("book_title"));
    }

    #[test]
    fn test_oversized_field_rejected() {
        let mut details = valid_details();
        details.family_name = "x".repeat(101);
        assert!(details.validate().is_err());

        let mut details = valid_details();
        details.book_title = "x".repeat(257);
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let mut details = valid_details();
        details.family_name = "x".repeat(100);
        details.book_title = "x".repeat(256);
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_control_characters_rejected() {
        let mut details = valid_details();
        details.genre_name = "Sci\x00Fi".to_string();
        assert!(details.validate().is_err());
    }
}
