use crate::models::{Clinic, DentalClinic, FeedKind, VetClinic};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching or normalizing an upstream feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned error status: {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid feed payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP client for the upstream clinic feeds
///
/// Issues a single GET per feed, no retry. A feed's payload is deserialized
/// into its own shape and mapped onto the canonical [`Clinic`] record; a
/// malformed payload drops that feed's contribution entirely.
pub struct FeedClient {
    dental_url: String,
    vet_url: String,
    client: Client,
}

impl FeedClient {
    /// Create a new feed client with a per-request timeout
    pub fn new(dental_url: String, vet_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            dental_url,
            vet_url,
            client,
        }
    }

    /// Fetch the raw body from a feed URL
    ///
    /// A non-2xx status is a fetch error; the body of an upstream error page
    /// never reaches the parser.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        tracing::debug!("Fetching feed from: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch and normalize the dental feed
    pub async fn get_dental_clinics(&self) -> Result<Vec<Clinic>, FeedError> {
        let body = self.fetch(&self.dental_url).await?;
        normalize(FeedKind::Dental, &body)
    }

    /// Fetch and normalize the veterinary feed
    pub async fn get_vet_clinics(&self) -> Result<Vec<Clinic>, FeedError> {
        let body = self.fetch(&self.vet_url).await?;
        normalize(FeedKind::Vet, &body)
    }
}

/// Deserialize a raw feed payload and map it onto canonical records
pub fn normalize(kind: FeedKind, raw: &[u8]) -> Result<Vec<Clinic>, FeedError> {
    let clinics = match kind {
        FeedKind::Dental => serde_json::from_slice::<Vec<DentalClinic>>(raw)?
            .into_iter()
            .map(Clinic::from)
            .collect(),
        FeedKind::Vet => serde_json::from_slice::<Vec<VetClinic>>(raw)?
            .into_iter()
            .map(Clinic::from)
            .collect(),
    };

    Ok(clinics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dental_payload() {
        let raw = br#"[{"name":"Mayo Dental","stateName":"Minnesota","availability":{"from":"09:00","to":"20:00"}}]"#;

        let clinics = normalize(FeedKind::Dental, raw).unwrap();
        assert_eq!(clinics.len(), 1);
        assert_eq!(clinics[0].name, "Mayo Dental");
        assert_eq!(clinics[0].state, "Minnesota");
        assert_eq!(clinics[0].availability.from, "09:00");
    }

    #[test]
    fn test_normalize_vet_payload() {
        let raw = br#"[{"clinicName":"City Vet Clinic","stateCode":"CA","opening":{"from":"10:00","to":"18:00"}}]"#;

        let clinics = normalize(FeedKind::Vet, raw).unwrap();
        assert_eq!(clinics.len(), 1);
        assert_eq!(clinics[0].name, "City Vet Clinic");
        assert_eq!(clinics[0].state, "CA");
        assert_eq!(clinics[0].availability.to, "18:00");
    }

    #[test]
    fn test_normalize_rejects_malformed_payload() {
        let raw = br#"{"not":"an array"}"#;

        let err = normalize(FeedKind::Dental, raw).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn test_normalize_rejects_wrong_shape() {
        // Vet payload fed through the dental shape is missing stateName
        let raw = br#"[{"clinicName":"City Vet Clinic","stateCode":"CA","opening":{"from":"10:00","to":"18:00"}}]"#;

        let err = normalize(FeedKind::Dental, raw).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn test_normalize_empty_array() {
        let clinics = normalize(FeedKind::Vet, b"[]").unwrap();
        assert!(clinics.is_empty());
    }
}
