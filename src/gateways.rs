use crate::config::{self, CacheBackend, Config};
use anyhow::Result;
use geoloc_core::{
    entities::Coordinate,
    gateways::cache::{CacheError, GeoLocationCache},
    GeoCoder,
};
use geoloc_gateways::{
    cache::{InMemoryCache, JsonFileCache, NoCache},
    http::ReqwestFetch,
};
use std::time::Duration;

pub type GeoCoderGw = GeoCoder<ReqwestFetch, CacheGw>;

pub fn geocoder(cfg: &Config) -> Result<GeoCoderGw> {
    let fetch = ReqwestFetch::try_new(cfg.http.timeout)?;
    let cache = cache_gateway(&cfg.cache)?;
    let geocoder = GeoCoder::new(fetch, cache, cfg.geocoding.api_key.clone())
        .with_service_url(cfg.geocoding.service_url.clone())
        .with_cache_tags(cfg.cache.tags.clone())
        .with_cache_lifetime(Some(cfg.cache.lifetime));
    Ok(geocoder)
}

pub fn cache_gateway(cfg: &config::Cache) -> Result<CacheGw> {
    let gw = match &cfg.backend {
        Some(CacheBackend::Memory) => {
            log::debug!("Use in-memory cache");
            CacheGw::new(InMemoryCache::new(cfg.lifetime))
        }
        Some(CacheBackend::JsonFile { dir }) => {
            CacheGw::new(JsonFileCache::try_new(dir, cfg.lifetime)?)
        }
        None => {
            log::warn!("No cache was configured");
            CacheGw::new(NoCache)
        }
    };
    Ok(gw)
}

pub struct CacheGw(Box<dyn GeoLocationCache + Send + Sync + 'static>);

impl CacheGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoLocationCache + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoLocationCache for CacheGw {
    fn get(&self, id: &str) -> Result<Option<Coordinate>, CacheError> {
        self.0.get(id)
    }
    fn set(
        &self,
        id: &str,
        data: &Coordinate,
        tags: &[String],
        lifetime: Option<Duration>,
    ) -> Result<(), CacheError> {
        self.0.set(id, data, tags, lifetime)
    }
    fn remove(&self, id: &str) -> Result<bool, CacheError> {
        self.0.remove(id)
    }
    fn flush_by_tag(&self, tag: &str) -> Result<usize, CacheError> {
        self.0.flush_by_tag(tag)
    }
    fn flush(&self) -> Result<(), CacheError> {
        self.0.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_cfg(backend: Option<CacheBackend>) -> config::Cache {
        config::Cache {
            backend,
            lifetime: Duration::from_secs(60),
            tags: vec![],
        }
    }

    #[test]
    fn in_memory_cache_gateway() {
        let gw = cache_gateway(&cache_cfg(Some(CacheBackend::Memory))).unwrap();
        let pos = Coordinate::new(1.0, 2.0);
        gw.set("a", &pos, &[], None).unwrap();
        assert_eq!(Some(pos), gw.get("a").unwrap());
    }

    #[test]
    fn disabled_cache_gateway() {
        let gw = cache_gateway(&cache_cfg(None)).unwrap();
        assert!(matches!(gw.get("a"), Err(CacheError::Unavailable)));
    }
}
