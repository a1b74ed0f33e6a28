//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod action_repo;
pub mod audit_repo;
pub mod incident_repo;
pub mod organisation_repo;
pub mod quickscan_repo;
pub mod risk_score_repo;
pub mod session_repo;
pub mod supplier_repo;
pub mod user_repo;

pub use action_repo::ActionRepo;
pub use audit_repo::AuditLogRepo;
pub use incident_repo::IncidentRepo;
pub use organisation_repo::OrganisationRepo;
pub use quickscan_repo::QuickscanRepo;
pub use risk_score_repo::RiskScoreRepo;
pub use session_repo::SessionRepo;
pub use supplier_repo::SupplierRepo;
pub use user_repo::UserRepo;
