//! HTTP request handlers, one module per resource.

pub mod action;
pub mod audit;
pub mod auth;
pub mod incident;
pub mod organisation;
pub mod risk_score;
pub mod supplier;
