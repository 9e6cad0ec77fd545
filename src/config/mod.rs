use anyhow::{anyhow, Result};
use geoloc_core::gateways::cache::{CACHE_NAME, DEFAULT_LIFETIME};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geoloc.toml";

const ENV_NAME_API_KEY: &str = "GOOGLE_API_KEY";

pub struct Config {
    pub geocoding: Geocoding,
    pub cache: Cache,
    pub http: Http,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let cfg_string = fs::read_to_string(file_path.as_ref()).map_err(|err| {
                    anyhow!(
                        "Unable to read configuration file {}: {err}",
                        file_path.as_ref().display()
                    )
                })?;
                toml::from_str(&cfg_string)?
            }
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                Ok(cfg_string) => {
                    log::info!("Load configuration from {DEFAULT_CONFIG_FILE_NAME}");
                    toml::from_str(&cfg_string)?
                }
                Err(err) => match err.kind() {
                    ErrorKind::NotFound => {
                        log::info!(
                            "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                        );
                        Ok(raw::Config::default())
                    }
                    _ => Err(err),
                }?,
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_API_KEY) {
            cfg.geocoding.api_key = api_key;
        }
        if cfg.geocoding.api_key.is_empty() {
            log::warn!("No Google API key found");
        }
        Ok(cfg)
    }
}

pub struct Geocoding {
    pub service_url: Url,
    pub api_key: String,
}

pub struct Cache {
    /// No backend means that caching is disabled.
    pub backend: Option<CacheBackend>,
    pub lifetime: Duration,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CacheBackend {
    Memory,
    JsonFile {
        /// File system directory for the cache entries.
        dir: PathBuf,
    },
}

pub struct Http {
    pub timeout: Option<Duration>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            cache,
            http,
        } = from;

        let raw::Geocoding {
            service_url,
            api_key,
        } = geocoding.unwrap_or_default();

        let service_url = match service_url {
            Some(url) => url
                .parse::<Url>()
                .map_err(|err| anyhow!("Invalid service URL '{url}': {err}"))?,
            None => geoloc_core::service_url::DEFAULT_SERVICE_URL.parse::<Url>()?,
        };
        let geocoding = Geocoding {
            service_url,
            api_key: api_key.unwrap_or_default(),
        };

        let raw::Cache {
            backend,
            lifetime,
            tags,
            json_file,
        } = cache.unwrap_or_default();

        let backend = match backend.unwrap_or(raw::CacheBackend::Memory) {
            raw::CacheBackend::Memory => Some(CacheBackend::Memory),
            raw::CacheBackend::JsonFile => {
                let dir = json_file
                    .map(|raw::JsonFile { dir }| dir)
                    .unwrap_or_else(|| PathBuf::from(CACHE_NAME));
                log::info!("Use JSON file cache ({})", dir.display());
                Some(CacheBackend::JsonFile { dir })
            }
            raw::CacheBackend::None => {
                log::info!("Caching is disabled");
                None
            }
        };
        let cache = Cache {
            backend,
            lifetime: lifetime.unwrap_or(DEFAULT_LIFETIME),
            tags,
        };

        let raw::Http { timeout } = http.unwrap_or_default();
        let http = Http { timeout };

        Ok(Self {
            geocoding,
            cache,
            http,
        })
    }
}
