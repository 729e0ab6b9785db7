//! Repository layer for database operations

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book, BookStatus, Genre, NewBook},
};

/// Store operations the catalog service depends on.
///
/// The service holds this trait rather than the concrete [`Repository`] so
/// its tests can substitute a double for the database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Exact match on the (family name, first name) compound key
    async fn find_author(&self, family_name: &str, first_name: &str)
        -> AppResult<Option<Author>>;

    /// Exact match on the genre name
    async fn find_genre(&self, name: &str) -> AppResult<Option<Genre>>;

    async fn insert_book(&self, book: &NewBook) -> AppResult<Book>;

    /// Every copy's (title, status) pair in insertion order
    async fn list_statuses(&self) -> AppResult<Vec<BookStatus>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub genres: genres::GenresRepository,
    pub books: books::BooksRepository,
    pub book_instances: book_instances::BookInstancesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            genres: genres::GenresRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            book_instances: book_instances::BookInstancesRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn find_author(
        &self,
        family_name: &str,
        first_name: &str,
    ) -> AppResult<Option<Author>> {
        self.authors.find_by_name(family_name, first_name).await
    }

    async fn find_genre(&self, name: &str) -> AppResult<Option<Genre>> {
        self.genres.find_by_name(name).await
    }

    async fn insert_book(&self, book: &NewBook) -> AppResult<Book> {
        self.books.create(book).await
    }

    async fn list_statuses(&self) -> AppResult<Vec<BookStatus>> {
        self.book_instances.list_statuses().await
    }
}
