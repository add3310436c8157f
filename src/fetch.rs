use crate::config::Config;
use crate::error::{FantasyError, Result};
use log::debug;
use scraper::Html;
use std::cell::RefCell;
use std::collections::HashMap;

/// Gets the raw page behind a url
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// The real thing. One blocking request per call, no retries.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:102.0) Gecko/20100101 Firefox/102.0",
            )
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| FantasyError::Fetch {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let to_error = |source| FantasyError::Fetch {
            url: url.to_string(),
            source,
        };
        let resp = self.client.get(url).send().map_err(to_error)?;
        if !resp.status().is_success() {
            return Err(FantasyError::BadStatus {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        resp.text().map_err(to_error)
    }
}

/// Serves pages from memory, for captured pages and tests. Unknown urls get a 404.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, content: &str) -> Self {
        self.pages.insert(url.to_string(), content.to_string());
        self
    }

    /// Every url asked for so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FantasyError::BadStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

pub fn fetch_document<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<Html> {
    debug!("Fetching data from {}", url);
    let content = fetcher.fetch(url)?;
    Ok(Html::parse_document(&content))
}
