//! Authors repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Author};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Look up an author by the (family name, first name) compound key
    pub async fn find_by_name(
        &self,
        family_name: &str,
        first_name: &str,
    ) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, family_name, first_name
            FROM authors
            WHERE family_name = $1 AND first_name = $2
            "#,
        )
        .bind(family_name)
        .bind(first_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }
}
