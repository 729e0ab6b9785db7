//! Book instance (physical copy) types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Copy availability status codes as stored in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum InstanceStatus {
    Available = 0,
    Loaned = 1,
    Maintenance = 2,
    Reserved = 3,
}

impl From<i16> for InstanceStatus {
    fn from(v: i16) -> Self {
        match v {
            0 => InstanceStatus::Available,
            1 => InstanceStatus::Loaned,
            3 => InstanceStatus::Reserved,
            _ => InstanceStatus::Maintenance,
        }
    }
}

impl From<InstanceStatus> for i16 {
    fn from(s: InstanceStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Loaned => "Loaned",
            InstanceStatus::Maintenance => "Maintenance",
            InstanceStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// Projection of one copy for the status read path: the denormalized book
/// title plus the raw status code.
#[derive(Debug, Clone, FromRow)]
pub struct BookStatus {
    pub title: String,
    pub status: i16,
}
