use url::Url;

pub trait HttpFetch {
    /// Request the given URL and return the raw response body.
    ///
    /// Failures on the transport level as well as unsuccessful
    /// HTTP status codes are reported as errors.
    fn fetch(&self, url: &Url) -> anyhow::Result<Vec<u8>>;
}
