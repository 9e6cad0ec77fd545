use geoloc_core::{
    entities::Coordinate,
    gateways::cache::{CacheError, GeoLocationCache},
};
use std::time::Duration;
use time::OffsetDateTime;

mod json_file;
mod memory;

pub use self::{json_file::JsonFileCache, memory::InMemoryCache};

/// Calculate the expiration time of a new entry.
///
/// A zero lifetime never expires, neither does a lifetime
/// that exceeds the representable date range.
fn expires_at(
    now: OffsetDateTime,
    lifetime: Option<Duration>,
    default_lifetime: Duration,
) -> Option<OffsetDateTime> {
    let lifetime = lifetime.unwrap_or(default_lifetime);
    if lifetime.is_zero() {
        return None;
    }
    time::Duration::try_from(lifetime)
        .ok()
        .and_then(|lifetime| now.checked_add(lifetime))
}

/// Used if no cache backend has been configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl GeoLocationCache for NoCache {
    fn get(&self, _: &str) -> Result<Option<Coordinate>, CacheError> {
        Err(CacheError::Unavailable)
    }
    fn set(
        &self,
        _: &str,
        _: &Coordinate,
        _: &[String],
        _: Option<Duration>,
    ) -> Result<(), CacheError> {
        Err(CacheError::Unavailable)
    }
    fn remove(&self, _: &str) -> Result<bool, CacheError> {
        Err(CacheError::Unavailable)
    }
    fn flush_by_tag(&self, _: &str) -> Result<usize, CacheError> {
        Err(CacheError::Unavailable)
    }
    fn flush(&self) -> Result<(), CacheError> {
        Err(CacheError::Unavailable)
    }
}
