//! Audit event bus and recording infrastructure.
//!
//! Request handlers publish [`AuditEvent`]s onto the in-process [`AuditBus`]
//! and move on; the [`AuditRecorder`] background task subscribes to the bus
//! and writes each event to the `audit_logs` table. A failed write is logged
//! and dropped, never surfaced to the request that produced it.

pub mod bus;
pub mod recorder;

pub use bus::{AuditBus, AuditEvent};
pub use recorder::AuditRecorder;
