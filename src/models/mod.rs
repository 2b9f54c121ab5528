// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, Clinic, DentalClinic, FeedKind, VetClinic};
pub use requests::SearchParams;
pub use responses::{ErrorResponse, HealthResponse};
