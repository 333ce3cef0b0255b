use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    package::{AurResponse, PackageRecord, SearchResponse},
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to initialize HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("network error: could not reach repository service")]
    Transport(#[from] reqwest::Error),
    #[error("repository service returned HTTP {}", .0.as_u16())]
    ServerStatus(StatusCode),
    #[error("malformed response from server")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(PackageRecord),
    NotFound,
}

pub struct Fetcher {
    client: Client,
    endpoint: Url,
    aur_endpoint: Url,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(FetchError::Client)?,
            endpoint: config.endpoint.clone(),
            aur_endpoint: config.aur_endpoint.clone(),
        })
    }

    /// Looks up `name` with a single search request and keeps the first result.
    pub async fn fetch(&self, name: &str) -> Result<Lookup, FetchError> {
        let search: SearchResponse = self.get_json(&self.endpoint, &[("name", name)]).await?;
        debug!("Search returned {} result(s)", search.results.len());

        Ok(match search.results.into_iter().next() {
            Some(result) => Lookup::Found(result.into()),
            None => Lookup::NotFound,
        })
    }

    /// Looks up `name` through the AUR RPC `info` call.
    pub async fn fetch_aur(&self, name: &str) -> Result<Lookup, FetchError> {
        let info: AurResponse = self
            .get_json(
                &self.aur_endpoint,
                &[("v", "5"), ("type", "info"), ("arg[]", name)],
            )
            .await?;
        debug!("AUR returned {} result(s)", info.results.len());

        Ok(match info.results.into_iter().next() {
            Some(package) => Lookup::Found(package.into()),
            None => Lookup::NotFound,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(url.clone()).query(query).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("{} answered with status {}", url, status);
            return Err(FetchError::ServerStatus(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
