// src/core/net.rs

// Blocking HTTP GET. Any non-2xx status is an error; there is no retry.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Page source. The runner only needs "give me the body of this URL",
/// which keeps the whole pipeline testable against saved fixtures.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|source| ScrapeError::Http { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Http { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp
            .text()
            .map_err(|source| ScrapeError::Http { url: s!(url), source })?;
        logd!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}

/// Join a site-relative link onto the base URL. Absolute links pass through.
pub fn join_url(base: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return s!(link);
    }
    join!(base.trim_end_matches('/'), "/", link.trim_start_matches('/'))
}
