//! The JSON response of the Google Geocoding API.
//!
//! Only the fields needed to extract the location are modelled:
//!
//! ```json
//! { "status": "OK", "results": [{ "geometry": { "location": { "lat": 0.0, "lng": 0.0 } } }] }
//! ```

use crate::{entities::Coordinate, Error, Result};
use serde::Deserialize;

pub const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Coordinate,
}

impl GeocodeResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|err| Error::MalformedResponse(err.to_string()))
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The location of the best match.
    pub fn first_location(&self) -> Result<Coordinate> {
        self.results
            .first()
            .map(|res| res.geometry.location)
            .ok_or_else(|| Error::MalformedResponse("No results".to_string()))
    }
}
