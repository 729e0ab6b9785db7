//! Book instances repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::BookStatus};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Read every copy's (title, status) pair.
    ///
    /// Ordered by the serial primary key, which is the order the copies were
    /// inserted; the read path never reorders.
    pub async fn list_statuses(&self) -> AppResult<Vec<BookStatus>> {
        let rows = sqlx::query_as::<_, BookStatus>(
            "SELECT title, status FROM book_instances ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
