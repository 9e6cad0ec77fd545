use crate::{
    cache_key::calculate_cache_identifier,
    entities::*,
    gateways::{
        cache::{CacheError, GeoLocationCache},
        fetch::HttpFetch,
    },
    geo,
    response::GeocodeResponse,
    service_url::{build_service_url, ServiceParameters, DEFAULT_SERVICE_URL},
    Error, Result,
};
use itertools::Itertools;
use std::time::Duration;
use url::Url;

/// Resolves addresses to coordinates and caches the results.
#[derive(Debug)]
pub struct GeoCoder<F, C> {
    fetch: F,
    cache: C,
    service_url: Url,
    api_key: String,
    cache_tags: Vec<String>,
    cache_lifetime: Option<Duration>,
}

fn default_service_url() -> Url {
    DEFAULT_SERVICE_URL
        .parse()
        .expect("Default service URL")
}

/// Compose the address of a geocodable entity.
///
/// Returns `None` if the entity has no place.
pub fn geocoding_address<G>(obj: &G) -> Option<String>
where
    G: GeoCodable + ?Sized,
{
    let place = obj.place().filter(|p| !p.is_empty())?;
    let address = [obj.zip(), obj.address(), Some(place)]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .join(" ");
    Some(address)
}

impl<F, C> GeoCoder<F, C>
where
    F: HttpFetch,
    C: GeoLocationCache,
{
    pub fn new(fetch: F, cache: C, api_key: impl Into<String>) -> Self {
        Self {
            fetch,
            cache,
            service_url: default_service_url(),
            api_key: api_key.into(),
            cache_tags: vec![],
            cache_lifetime: None,
        }
    }

    pub fn with_service_url(mut self, service_url: Url) -> Self {
        self.service_url = service_url;
        self
    }

    pub fn with_cache_tags(mut self, tags: Vec<String>) -> Self {
        self.cache_tags = tags;
        self
    }

    pub fn with_cache_lifetime(mut self, lifetime: Option<Duration>) -> Self {
        self.cache_lifetime = lifetime;
        self
    }

    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    pub fn set_service_url(&mut self, service_url: &str) -> Result<()> {
        self.service_url = service_url.parse()?;
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn build_service_url_with_parameters(&self, parameters: &ServiceParameters) -> Url {
        build_service_url(&self.service_url, parameters)
    }

    /// Resolve the location of an address.
    ///
    /// Returns `None` if the geocoding service could not find the address.
    pub fn get_location(
        &self,
        address: &str,
        additional_parameters: &ServiceParameters,
    ) -> Result<Option<Coordinate>> {
        let mut parameters = additional_parameters.clone();
        parameters.insert("address".to_string(), address.to_string());
        parameters.insert("key".to_string(), self.api_key.clone());
        let url = self.build_service_url_with_parameters(&parameters);

        let cache_id = calculate_cache_identifier(&url);
        match self.cache.get(&cache_id) {
            Ok(Some(pos)) => {
                log::debug!("Found location of '{address}' in cache: {pos}");
                return Ok(Some(pos));
            }
            Ok(None) => {
                log::debug!("Location of '{address}' is not cached");
            }
            Err(CacheError::Unavailable) => {
                log::debug!("Cache is not available");
            }
            Err(err) => {
                log::warn!("Unable to read location of '{address}' from cache: {err}");
            }
        }

        let body = self.fetch.fetch(&url).map_err(Error::Transport)?;
        let response = GeocodeResponse::from_slice(&body)?;
        if !response.is_ok() {
            match &response.error_message {
                Some(msg) => log::warn!(
                    "Unable to resolve '{address}' ({}): {msg}",
                    response.status
                ),
                None => log::info!("Unable to resolve '{address}' ({})", response.status),
            }
            return Ok(None);
        }
        let pos = response.first_location()?;
        log::debug!("Resolved location of '{address}': {pos}");

        match self
            .cache
            .set(&cache_id, &pos, &self.cache_tags, self.cache_lifetime)
        {
            Ok(()) | Err(CacheError::Unavailable) => {}
            Err(err) => {
                log::warn!("Unable to store location of '{address}' in cache: {err}");
            }
        }
        Ok(Some(pos))
    }

    /// Resolve the address of the given object and update its position.
    ///
    /// Objects without a place are left untouched.
    pub fn update_geo_location<G>(&self, obj: &mut G) -> Result<Option<Coordinate>>
    where
        G: GeoCodable + ?Sized,
    {
        let Some(address) = geocoding_address(&*obj) else {
            return Ok(None);
        };
        let pos = self.get_location(&address, &ServiceParameters::new())?;
        if let Some(pos) = pos {
            obj.set_latitude(pos.lat);
            obj.set_longitude(pos.lng);
        }
        Ok(pos)
    }

    pub fn destination(
        &self,
        lat: f64,
        lng: f64,
        bearing: f64,
        distance: f64,
        units: Units,
    ) -> Coordinate {
        geo::destination(lat, lng, bearing, distance, units)
    }

    pub fn bounds_by_radius(&self, lat: f64, lng: f64, distance: f64, units: Units) -> BoundingBox {
        geo::bounding_box(lat, lng, distance, units)
    }

    pub fn distance(&self, lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64, units: Units) -> f64 {
        geo::distance(lat_a, lng_a, lat_b, lng_b, units)
    }
}
