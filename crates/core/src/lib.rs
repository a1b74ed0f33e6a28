//! Pure domain logic for the risk-assessment platform.
//!
//! This crate has no internal dependencies and no I/O. It contains the two
//! components with non-trivial correctness properties:
//!
//! - [`scoring`] — the deterministic risk-scoring engine that turns
//!   questionnaire answers into category and overall maturity scores.
//! - [`access`] — the role/ownership access decision evaluated before every
//!   organisation-scoped read or write.
//!
//! Everything else (enumerations, audit action names, the shared error
//! taxonomy) exists so the storage and API layers agree on one canonical
//! representation.

pub mod access;
pub mod audit;
pub mod error;
pub mod improvement;
pub mod scoring;
pub mod types;
