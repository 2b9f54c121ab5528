// Service exports
pub mod aggregator;
pub mod feeds;

pub use aggregator::{ClinicAggregator, DataFetcher};
pub use feeds::{normalize, FeedClient, FeedError};
