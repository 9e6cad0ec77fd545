use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid service URL: {0}")]
    ServiceUrl(#[from] url::ParseError),
    #[error("Geocoding request failed: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),
}
