use super::expires_at;
use geoloc_core::{
    entities::Coordinate,
    gateways::cache::{CacheError, GeoLocationCache, DEFAULT_LIFETIME},
};
use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{
    io::{self, ErrorKind},
    path::Path,
    time::Duration,
};
use time::OffsetDateTime;

/// A persistent cache that stores each entry in a JSON file.
pub struct JsonFileCache {
    json_store: Store,
    default_lifetime: Duration,
}

impl std::fmt::Debug for JsonFileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileCache")
            .field("path", &self.path())
            .field("default_lifetime", &self.default_lifetime)
            .finish()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEntry {
    data: Coordinate,
    tags: Vec<String>,
    /// Unix timestamp in milliseconds
    expires_at: Option<i64>,
}

fn unix_millis(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}

impl JsonEntry {
    fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|t| t <= unix_millis(now))
    }
}

fn other(err: io::Error) -> CacheError {
    CacheError::Other(err.into())
}

impl JsonFileCache {
    pub fn try_new<P: AsRef<Path>>(directory: P, default_lifetime: Duration) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self {
            json_store,
            default_lifetime,
        })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    fn delete(&self, id: &str) -> Result<bool, CacheError> {
        match self.json_store.delete(id) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(other(err)),
        }
    }

    fn all_entries(&self) -> Result<Vec<(String, JsonEntry)>, CacheError> {
        let entries = self.json_store.all::<JsonEntry>().map_err(other)?;
        Ok(entries.into_iter().collect())
    }
}

impl GeoLocationCache for JsonFileCache {
    fn get(&self, id: &str) -> Result<Option<Coordinate>, CacheError> {
        let entry = match self.json_store.get::<JsonEntry>(id) {
            Ok(entry) => entry,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(other(err)),
        };
        if entry.is_expired_at(OffsetDateTime::now_utc()) {
            log::debug!("Cache entry {id} expired");
            self.delete(id)?;
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
        let entry = JsonEntry {
            data: *data,
            tags: tags.to_vec(),
            expires_at: expires_at(OffsetDateTime::now_utc(), lifetime, self.default_lifetime)
                .map(unix_millis),
        };
        self.json_store.save_with_id(&entry, id).map_err(other)?;
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<bool, CacheError> {
        self.delete(id)
    }

    fn flush_by_tag(&self, tag: &str) -> Result<usize, CacheError> {
        let mut count = 0;
        for (id, entry) in self.all_entries()? {
            if entry.tags.iter().any(|t| t == tag) && self.delete(&id)? {
                count += 1;
            }
        }
        Ok(count)
    }

    fn flush(&self) -> Result<(), CacheError> {
        for (id, _) in self.all_entries()? {
            self.delete(&id)?;
        }
        Ok(())
    }
}
