//! # geoloc-core
//!
//! Resolves postal addresses to coordinates through the Google
//! Geocoding API and caches the results.
//!
//! All I/O is delegated to the [`gateways`], so the service can be
//! combined with any HTTP client and cache backend.

pub mod cache_key;
pub mod gateways;
pub mod geo;
pub mod response;
pub mod service_url;

mod error;
mod geocoder;

pub mod entities {
    pub use geoloc_entities::{address::*, geo::*, location::*};
}

pub use self::{error::Error, geocoder::*};

pub type Result<T> = std::result::Result<T, Error>;
