// src/config.rs
//! Service endpoint configuration

use anyhow::Result;

/// Environment variable holding the analysis service base URL.
pub const SERVICE_URL_ENV: &str = "CV_ANALYZER_URL";

/// Where the analysis service lives. The base URL is the only externally
/// supplied setting.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl ServiceConfig {
    /// Resolve the base URL from an explicit override or the environment.
    pub fn resolve(override_url: Option<String>) -> Result<Self> {
        let raw = match override_url {
            Some(url) => url,
            None => std::env::var(SERVICE_URL_ENV).map_err(|_| {
                anyhow::anyhow!(
                    "No analysis service configured. Pass --service-url or set {}",
                    SERVICE_URL_ENV
                )
            })?,
        };

        // Endpoints are joined as "{base}{endpoint}", so the base must not
        // end in a slash.
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}
