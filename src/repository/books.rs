//! Books repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Persist a new book. Both references must already be resolved; the
    /// foreign keys hold whatever the caller verified.
    pub async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, genre_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author_id, genre_id, created_at
            "#,
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.genre_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
