//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod action;
pub mod audit;
pub mod incident;
pub mod organisation;
pub mod quickscan;
pub mod risk_score;
pub mod session;
pub mod supplier;
pub mod user;
