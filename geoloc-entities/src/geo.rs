use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Mean earth radius in miles.
pub const EARTH_RADIUS_MI: f64 = 3963.19;

/// A geographical position in degrees.
///
/// The field names match the `location` object of the
/// Google Geocoding API so that the upstream JSON and the
/// cached value share the same representation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    pub fn from_lat_lng_rad(lat: f64, lng: f64) -> Self {
        Self::new(lat.to_degrees(), lng.to_degrees())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// The unit system used for distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::AsRefStr)]
pub enum Units {
    #[default]
    #[strum(serialize = "km")]
    Kilometers,
    #[strum(serialize = "mi")]
    Miles,
}

impl Units {
    /// Select the unit system by name.
    ///
    /// Only `km` (case-insensitive) selects kilometers,
    /// every other name results in miles.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("km") {
            Self::Kilometers
        } else {
            Self::Miles
        }
    }

    pub const fn earth_radius(self) -> f64 {
        match self {
            Self::Kilometers => EARTH_RADIUS_KM,
            Self::Miles => EARTH_RADIUS_MI,
        }
    }
}

impl FromStr for Units {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// The corners of a box around a center point
/// in the four cardinal directions.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north : Coordinate,
    pub east  : Coordinate,
    pub south : Coordinate,
    pub west  : Coordinate,
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "N {} E {} S {} W {}",
            self.north, self.east, self.south, self.west
        )
    }
}
