pub mod calculator;
pub mod config;
pub mod employee;
pub mod holiday;
pub mod justify;
pub mod log;
pub mod punch;
pub mod recalc;
pub mod report;
pub mod store;
