use serde::{Deserialize, Serialize};

/// Canonical clinic record used internally and in API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub name: String,
    pub state: String,
    pub availability: Availability,
}

/// Period during which a clinic is available, as "HH:MM" strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub from: String,
    pub to: String,
}

/// Dental feed record shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DentalClinic {
    pub name: String,
    #[serde(rename = "stateName")]
    pub state: String,
    pub availability: Availability,
}

/// Veterinary feed record shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetClinic {
    #[serde(rename = "clinicName")]
    pub name: String,
    #[serde(rename = "stateCode")]
    pub state: String,
    #[serde(rename = "opening")]
    pub availability: Availability,
}

impl From<DentalClinic> for Clinic {
    fn from(cl: DentalClinic) -> Self {
        Self {
            name: cl.name,
            state: cl.state,
            availability: cl.availability,
        }
    }
}

impl From<VetClinic> for Clinic {
    fn from(cl: VetClinic) -> Self {
        Self {
            name: cl.name,
            state: cl.state,
            availability: cl.availability,
        }
    }
}

/// Which upstream feed a payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Dental,
    Vet,
}

impl FeedKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedKind::Dental => "dental",
            FeedKind::Vet => "vet",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
