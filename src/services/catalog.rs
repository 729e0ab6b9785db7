//! Catalog service: book creation and copy status aggregation

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDetails, BookStatus, NewBook},
    repository::CatalogStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a book for an existing author and genre.
    ///
    /// Both references must resolve before anything is written; a failed
    /// lookup leaves the store untouched. One attempt per call, no retries.
    pub async fn create_book(&self, details: &BookDetails) -> AppResult<Book> {
        let author = self
            .store
            .find_author(&details.family_name, &details.first_name)
            .await?
            .ok_or_else(|| {
                AppError::Resolution(format!(
                    "Author {} {} not found",
                    details.first_name, details.family_name
                ))
            })?;

        let genre = self
            .store
            .find_genre(&details.genre_name)
            .await?
            .ok_or_else(|| {
                AppError::Resolution(format!("Genre {} not found", details.genre_name))
            })?;

        self.store
            .insert_book(&NewBook {
                title: details.book_title.clone(),
                author_id: author.id,
                genre_id: genre.id,
            })
            .await
    }

    /// Every copy's (title, status) pair, in the order the copies were added
    pub async fn book_statuses(&self) -> AppResult<Vec<BookStatus>> {
        self.store.list_statuses().await
    }
}
