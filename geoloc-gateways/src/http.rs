use anyhow::{bail, Result};
use geoloc_core::gateways::fetch::HttpFetch;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Fetches geocoding responses with a blocking HTTP client.
#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    client: Client,
}

impl ReqwestFetch {
    pub fn try_new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }
}

impl HttpFetch for ReqwestFetch {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        // The query contains the API key
        log::debug!(
            "Requesting {}://{}{}",
            url.scheme(),
            url.host_str().unwrap_or_default(),
            url.path()
        );
        let response = self.client.get(url.as_str()).send()?;
        let status = response.status();
        if !status.is_success() {
            bail!("Unexpected response status: {status}");
        }
        Ok(response.bytes()?.to_vec())
    }
}
