pub mod lifecycle;
pub mod log;
pub mod policy;
pub mod session;

pub use lifecycle::{compute_punch_out, record_punch, trim_to_cap};
pub use policy::{RETENTION_CAP, SessionPolicy, duration_for};
pub use session::{ActiveSession, PunchOutcome, SessionFlow};
