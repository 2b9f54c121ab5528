use crate::models::Clinic;
use crate::services::feeds::{FeedClient, FeedError};
use async_trait::async_trait;
use tracing::error;

/// Capability to produce the merged clinic data set
///
/// Handlers depend on this trait rather than the concrete aggregator so
/// tests can inject a stub. Implementations may surface an error; handlers
/// map it to a 500 response.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn get_clinic_data(&self) -> Result<Vec<Clinic>, FeedError>;
}

/// Merges both upstream feeds into one clinic list
///
/// Both feeds are fetched concurrently; each contributes its own sublist
/// and the lists are concatenated after the join. A failing feed is logged
/// and contributes zero records, so the merge itself never fails: the
/// worst case is an empty list.
pub struct ClinicAggregator {
    feeds: FeedClient,
}

impl ClinicAggregator {
    pub fn new(feeds: FeedClient) -> Self {
        Self { feeds }
    }
}

#[async_trait]
impl DataFetcher for ClinicAggregator {
    async fn get_clinic_data(&self) -> Result<Vec<Clinic>, FeedError> {
        let (dental, vet) = tokio::join!(
            self.feeds.get_dental_clinics(),
            self.feeds.get_vet_clinics()
        );

        let mut clinics = Vec::new();

        match dental {
            Ok(mut records) => clinics.append(&mut records),
            Err(e) => error!("error fetching dental clinics: {}", e),
        }

        match vet {
            Ok(mut records) => clinics.append(&mut records),
            Err(e) => error!("error fetching vet clinics: {}", e),
        }

        Ok(clinics)
    }
}
