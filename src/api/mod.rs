//! API handlers for Libris REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod status;
