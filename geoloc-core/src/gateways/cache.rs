use crate::entities::Coordinate;
use std::time::Duration;
use thiserror::Error;

/// Name of the cache that holds resolved locations.
pub const CACHE_NAME: &str = "geolocationservice_location";

/// Lifetime of an entry if no explicit lifetime is given.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(86_400);

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("The cache is not available")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A key-value store for resolved locations with tags and expiration.
///
/// A `lifetime` of `None` selects the default lifetime of the backend,
/// a zero lifetime means the entry never expires.
pub trait GeoLocationCache {
    fn get(&self, id: &str) -> Result<Option<Coordinate>, CacheError>;
    fn set(
        &self,
        id: &str,
        data: &Coordinate,
        tags: &[String],
        lifetime: Option<Duration>,
    ) -> Result<(), CacheError>;
    /// Returns `true` if an entry has been removed.
    fn remove(&self, id: &str) -> Result<bool, CacheError>;
    /// Returns the number of removed entries.
    fn flush_by_tag(&self, tag: &str) -> Result<usize, CacheError>;
    fn flush(&self) -> Result<(), CacheError>;
}
