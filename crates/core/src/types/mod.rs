//! Shared type definitions.

mod customer;
mod eligibility;
mod id;
mod log;
mod session;

pub use customer::CustomerRecord;
pub use eligibility::Eligibility;
pub use id::{CustomerId, LogId};
pub use log::{AuditLogEntry, LogAction};
pub use session::AdminSession;
