//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Author record, identified by the (family name, first name) compound key
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub family_name: String,
    pub first_name: String,
}
