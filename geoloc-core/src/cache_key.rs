//! Derivation of cache identifiers for geocoding requests.

use crate::service_url::ServiceParameters;
use itertools::Itertools;
use sha1::{Digest, Sha1};
use std::iter;
use url::{form_urlencoded, Url};

const LEGACY_SEPARATOR: &str = "|";

fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Calculate the cache identifier of a fully built request URL.
///
/// The query parameters are sorted before hashing, so the
/// order in which they have been added does not matter.
pub fn calculate_cache_identifier(service_url: &Url) -> String {
    let query_params: Vec<(String, String)> = service_url
        .query_pairs()
        .into_owned()
        .filter(|(name, _)| !name.is_empty())
        .sorted()
        .collect();
    let mut url = service_url.clone();
    if query_params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(query_params.iter());
    }
    sha1_hex(url.as_str())
}

/// Calculate the cache identifier from the parts of a request.
#[deprecated(note = "use calculate_cache_identifier() with the request URL")]
pub fn calculate_legacy_cache_identifier(
    address: &str,
    api_key: &str,
    additional_parameters: &ServiceParameters,
) -> String {
    let address: String = form_urlencoded::byte_serialize(address.as_bytes()).collect();
    let input = iter::once(address.as_str())
        .chain(iter::once(api_key))
        .chain(additional_parameters.values().map(String::as_str))
        .join(LEGACY_SEPARATOR);
    sha1_hex(&input)
}
