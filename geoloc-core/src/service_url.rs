use std::collections::BTreeMap;
use url::Url;

/// Parameters accepted by the Google Geocoding API.
/// Reference: https://developers.google.com/maps/documentation/geocoding/requests-geocoding
pub const VALID_SERVICE_URL_PARAMETERS: [&str; 6] =
    ["address", "key", "bounds", "language", "region", "components"];

pub const DEFAULT_SERVICE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json?&address=";

/// Query parameters of a geocoding request, ordered by name.
pub type ServiceParameters = BTreeMap<String, String>;

pub fn is_valid_parameter(name: &str) -> bool {
    VALID_SERVICE_URL_PARAMETERS.contains(&name)
}

/// Merge the given parameters into the query of the service URL.
///
/// Unknown parameters are dropped. Parameters that are already
/// encoded in the service URL are kept unless overridden.
pub fn build_service_url(service_url: &Url, parameters: &ServiceParameters) -> Url {
    let mut url = service_url.clone();
    if parameters.is_empty() {
        return url;
    }

    let mut params: ServiceParameters = parameters
        .iter()
        .filter(|(name, _)| is_valid_parameter(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    for (name, value) in service_url.query_pairs() {
        if !is_valid_parameter(&name) {
            continue;
        }
        params
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }

    if params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(params.iter());
    }
    url
}
