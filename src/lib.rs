//! Libris Library Catalog Server
//!
//! A Rust REST backend for a small library catalog, exposing the
//! availability status of every book copy and the creation of new books
//! linked to existing authors and genres.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod sanitize;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorKind};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
