use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("Google place id is not configured")]
    PlaceNotConfigured,

    #[error("Google Places library is not loaded")]
    PlacesUnavailable,

    #[error("Places request failed with status {0}")]
    PlacesStatus(String),

    #[error("place has no reviews")]
    NoReviews,

    #[error("failed to decode place details: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
