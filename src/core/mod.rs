// Core filtering exports
pub mod filters;

pub use filters::{filter_clinics, matches_availability, matches_name, matches_state};
