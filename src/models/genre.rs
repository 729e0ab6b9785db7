//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Genre record, identified by its unique name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}
