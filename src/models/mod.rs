pub mod punch_record;
pub mod session_type;
pub mod sub_variant;

pub use punch_record::PunchRecord;
pub use session_type::SessionType;
pub use sub_variant::SubVariant;
