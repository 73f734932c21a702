pub mod aggregate;
pub mod stats;

pub use aggregate::{Attendant, AttendantDto};
pub use stats::{quick_contacts, AttendantStats};
