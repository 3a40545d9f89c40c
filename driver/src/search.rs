use std::time::Duration;

use error_stack::Report;
use reqwest::Url;
use serde::Deserialize;

use kernel::interface::query::SimilarBookQuery;
use kernel::prelude::entity::{SimilarBook, SimilarQuery};
use kernel::KernelError;

use crate::env_or;
use crate::error::{ConvertError, DriverError};

const SEARCH_ENDPOINT: &str = "BOOKSHELF_SEARCH_ENDPOINT";
const SEARCH_TIMEOUT_SECS: &str = "BOOKSHELF_SEARCH_TIMEOUT_SECS";
pub const DEFAULT_ENDPOINT: &str = "https://api.itbook.store/1.0";
const DEFAULT_TIMEOUT_SECS: &str = "10";

/// Client for the IT-Bookstore search API.
pub struct ItBookClient {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    books: Vec<SearchHit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchHit {
    title: String,
    subtitle: String,
    isbn13: String,
    price: String,
    image: String,
    url: String,
}

impl From<SearchHit> for SimilarBook {
    fn from(hit: SearchHit) -> Self {
        SimilarBook::new(
            hit.title,
            hit.subtitle,
            hit.price,
            hit.image,
            hit.url,
            hit.isbn13,
        )
    }
}

impl ItBookClient {
    pub fn new(endpoint: &str, timeout: Duration) -> error_stack::Result<Self, KernelError> {
        let endpoint = Url::parse(endpoint).map_err(|error| DriverError::Config {
            key: SEARCH_ENDPOINT,
            reason: error.to_string(),
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(DriverError::Config {
                key: SEARCH_ENDPOINT,
                reason: format!("{endpoint} cannot carry a path"),
            }
            .into());
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .convert_error()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_vars(env_or)
    }

    pub(crate) fn from_vars(
        var: impl Fn(&str, &str) -> Result<String, DriverError>,
    ) -> error_stack::Result<Self, KernelError> {
        let endpoint = var(SEARCH_ENDPOINT, DEFAULT_ENDPOINT)?;
        let timeout = var(SEARCH_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
        let timeout = timeout
            .trim()
            .parse::<u64>()
            .map_err(|error| DriverError::Config {
                key: SEARCH_TIMEOUT_SECS,
                reason: error.to_string(),
            })?;
        Self::new(&endpoint, Duration::from_secs(timeout))
    }

    fn search_url(&self, query: &SimilarQuery) -> error_stack::Result<Url, KernelError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Report::new(KernelError::Invalid)
                    .attach_printable(format!("{} cannot carry a path", self.endpoint))
            })?
            .pop_if_empty()
            .push("search")
            .push(query.as_str());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SimilarBookQuery for ItBookClient {
    async fn search(
        &self,
        query: &SimilarQuery,
    ) -> error_stack::Result<Vec<SimilarBook>, KernelError> {
        let url = self.search_url(query)?;
        tracing::debug!("searching {}", url);

        let response = self.client.get(url).send().await.convert_error()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Report::new(DriverError::Status(status.as_u16()))
                .change_context(KernelError::Network)
                .attach_printable(format!("search for {:?} failed", query.as_str())));
        }
        let body = response.json::<SearchResponse>().await.convert_error()?;
        Ok(body.books.into_iter().map(SimilarBook::from).collect())
    }
}
