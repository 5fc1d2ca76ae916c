use std::time::Duration;

use sitegrab_core::SiteData;

use crate::types::{FailureKind, FetchError};

/// Tuning knobs for a single fetch.
///
/// Both limits default to `None`: a hung connection blocks its run
/// indefinitely. Tests and hardened callers can bound a fetch by setting
/// them.
#[derive(Debug, Clone, Default)]
pub struct FetchSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

/// Performs one GET of one target and returns the body as text.
///
/// Each invocation builds a fresh client; no connections are reused between
/// fetches, so every call is independent of every other.
#[derive(Debug, Clone)]
pub struct SiteFetcher {
    settings: FetchSettings,
}

impl SiteFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    /// Blocking fetch. Must not be called from inside an async context.
    pub fn fetch_blocking(&self, url: &str) -> Result<SiteData, FetchError> {
        let parsed = parse_url(url)?;
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        // The blocking client defaults to a 30s request timeout; clear it
        // unless the settings ask for one.
        builder = builder.timeout(self.settings.request_timeout);
        let client = builder
            .build()
            .map_err(|err| map_reqwest_error(url, &err))?;

        let response = client
            .get(parsed)
            .send()
            .map_err(|err| map_reqwest_error(url, &err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(url, FailureKind::HttpStatus(status.as_u16())));
        }

        let body = response
            .text()
            .map_err(|err| map_reqwest_error(url, &err))?;
        Ok(SiteData::new(url, body))
    }

    /// Suspendable fetch. Yields to the scheduler while the request is
    /// outstanding.
    pub async fn fetch(&self, url: &str) -> Result<SiteData, FetchError> {
        let parsed = parse_url(url)?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| map_reqwest_error(url, &err))?;

        let response = client
            .get(parsed)
            .send()
            .await
            .map_err(|err| map_reqwest_error(url, &err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(url, FailureKind::HttpStatus(status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|err| map_reqwest_error(url, &err))?;
        Ok(SiteData::new(url, body))
    }
}

fn parse_url(url: &str) -> Result<reqwest::Url, FetchError> {
    reqwest::Url::parse(url).map_err(|_| FetchError::new(url, FailureKind::InvalidUrl))
}

fn map_reqwest_error(url: &str, err: &reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else {
        FailureKind::Network
    };
    FetchError::new(url, kind)
}
