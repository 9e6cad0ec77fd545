use crate::{address::*, geo::*};

/// Read access to the address parts and write access to the
/// position of an entity that can be geocoded.
pub trait GeoCodable {
    fn place(&self) -> Option<&str>;
    fn zip(&self) -> Option<&str>;
    fn address(&self) -> Option<&str>;
    fn latitude(&self) -> Option<f64>;
    fn longitude(&self) -> Option<f64>;
    fn set_latitude(&mut self, lat: f64);
    fn set_longitude(&mut self, lng: f64);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub pos: Option<Coordinate>,
    pub address: Address,
}

impl GeoCodable for Location {
    fn place(&self) -> Option<&str> {
        self.address.place.as_deref()
    }
    fn zip(&self) -> Option<&str> {
        self.address.zip.as_deref()
    }
    fn address(&self) -> Option<&str> {
        self.address.street.as_deref()
    }
    fn latitude(&self) -> Option<f64> {
        self.pos.map(|p| p.lat)
    }
    fn longitude(&self) -> Option<f64> {
        self.pos.map(|p| p.lng)
    }
    fn set_latitude(&mut self, lat: f64) {
        self.pos.get_or_insert_with(Default::default).lat = lat;
    }
    fn set_longitude(&mut self, lng: f64) {
        self.pos.get_or_insert_with(Default::default).lng = lng;
    }
}
