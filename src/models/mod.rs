pub mod employment;
pub mod event_type;
pub mod geo;
pub mod log_entry;
pub mod staff;

pub use employment::EmploymentStatus;
pub use event_type::{EventType, Presence};
pub use geo::GeoPoint;
pub use log_entry::LogEntry;
pub use staff::StaffRecord;
