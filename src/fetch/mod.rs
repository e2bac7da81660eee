use std::{fmt::Display, future::Future, time::Instant};

use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::config::{FETCH_TIMEOUT, USER_AGENT};

/// Why a restaurant page could not be fetched. The dashboard treats every variant the same
/// way; the distinction only shows up in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Timeout,
    Status(u16),
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(e.to_string())
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "timed out after {FETCH_TIMEOUT:?}"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Request(msg) => write!(f, "HTTP Request Error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can turn a url into page markup.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>>;
}

impl Fetcher for Client {
    #[instrument(skip(self, url), fields(url = %url), level = Level::TRACE)]
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self.get(url.clone()).send().await?.error_for_status()?;
        let text = response.text().await?;
        log::trace!("Got text of {url} in \t {:?}", start.elapsed());
        Ok(text)
    }
}

/// Client shared by every restaurant. Each request gives up after [`FETCH_TIMEOUT`].
pub fn make_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .connect_timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
}

/// Fetches every url on the current task. Results come back in input order and a failure
/// for one url does not affect the others.
pub async fn fetch_all<'a, F: Fetcher>(
    fetcher: &F,
    urls: impl IntoIterator<Item = &'a Url>,
) -> Vec<Result<String, FetchError>> {
    futures::future::join_all(urls.into_iter().map(|url| fetcher.fetch(url))).await
}
