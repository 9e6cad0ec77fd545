#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # geoloc-entities
//!
//! Reusable, agnostic value types for geocoding.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod geo;
pub mod location;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
