//! Genres repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Genre};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Look up a genre by its unique name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(genre)
    }
}
