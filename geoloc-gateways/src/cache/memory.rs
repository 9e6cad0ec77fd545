use super::expires_at;
use anyhow::anyhow;
use geoloc_core::{
    entities::Coordinate,
    gateways::cache::{CacheError, GeoLocationCache, DEFAULT_LIFETIME},
};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
    time::Duration,
};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
struct Entry {
    data: Coordinate,
    tags: Vec<String>,
    expires_at: Option<OffsetDateTime>,
}

impl Entry {
    fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }
}

/// A process local cache.
#[derive(Debug)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    default_lifetime: Duration,
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_LIFETIME)
    }
}

impl InMemoryCache {
    pub fn new(default_lifetime: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_lifetime,
        }
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("In-memory cache is poisoned").into())
    }

    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GeoLocationCache for InMemoryCache {
    fn get(&self, id: &str) -> Result<Option<Coordinate>, CacheError> {
        let mut entries = self.entries()?;
        let Some(entry) = entries.get(id) else {
            return Ok(None);
        };
        if entry.is_expired_at(OffsetDateTime::now_utc()) {
            log::debug!("Cache entry {id} expired");
            entries.remove(id);
            return Ok(None);
        }
        Ok(Some(entry.data))
    }

    fn set(
        &self,
        id: &str,
        data: &Coordinate,
        tags: &[String],
        lifetime: Option<Duration>,
    ) -> Result<(), CacheError> {
        let now = OffsetDateTime::now_utc();
        let entry = Entry {
            data: *data,
            tags: tags.to_vec(),
            expires_at: expires_at(now, lifetime, self.default_lifetime),
        };
        let mut entries = self.entries()?;
        entries.retain(|_, e| !e.is_expired_at(now));
        entries.insert(id.to_string(), entry);
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<bool, CacheError> {
        Ok(self.entries()?.remove(id).is_some())
    }

    fn flush_by_tag(&self, tag: &str) -> Result<usize, CacheError> {
        let mut entries = self.entries()?;
        let count = entries.len();
        entries.retain(|_, e| !e.tags.iter().any(|t| t == tag));
        Ok(count - entries.len())
    }

    fn flush(&self) -> Result<(), CacheError> {
        self.entries()?.clear();
        Ok(())
    }
}
