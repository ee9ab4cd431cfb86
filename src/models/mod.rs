pub mod day_type;
pub mod employee;
pub mod holiday;
pub mod justification;
pub mod punch;
pub mod summary;
