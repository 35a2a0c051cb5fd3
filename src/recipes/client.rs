//! HTTP client for recipe lookups.
//!
//! Provides a blocking client with connect/request timeouts so a stalled
//! endpoint cannot hang a check forever.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{CheckError, CheckResult};

const USER_AGENT: &str = concat!("relcheck/", env!("CARGO_PKG_VERSION"));

/// Returns the HTTP status of a recipe page.
pub trait RecipeProbe {
    /// Issue a GET for `url` and return the status code.
    ///
    /// Only transport failures are errors; every status code is returned.
    fn status(&self, url: &str) -> CheckResult<u16>;
}

/// [`RecipeProbe`] backed by a real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpRecipeProbe {
    client: Client,
}

impl HttpRecipeProbe {
    pub fn new(config: &Config) -> CheckResult<Self> {
        let client = create_http_client(
            Duration::from_secs(config.http_connect_timeout_secs),
            Duration::from_secs(config.http_timeout_secs),
        )
        .map_err(|source| CheckError::Http {
            url: config.recipe_url_base.clone(),
            source,
        })?;
        Ok(Self { client })
    }
}

impl RecipeProbe for HttpRecipeProbe {
    fn status(&self, url: &str) -> CheckResult<u16> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| CheckError::Http {
                url: url.to_string(),
                source,
            })?;
        Ok(response.status().as_u16())
    }
}

/// Create an HTTP client with timeout configuration.
/// - connect_timeout: Maximum time to establish a TCP connection
/// - timeout: Maximum time for the entire request
pub(crate) fn create_http_client(
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
