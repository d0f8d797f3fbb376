use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

mod endpoints;

// MARK: Errors

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{url}: API responded with status code: {status}")]
    BadStatus { url: String, status: StatusCode },

    #[error("{url}: unexpected response body: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

// MARK: Client

/// Way to read the Groupie Trackers API
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Single GET decoding a JSON body into `T`. Anything but 200 is an error
    pub async fn fetch<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", url);
        let res = self.http.get(url).send().await?;
        let status = res.status();
        if status != StatusCode::OK {
            return Err(FetchError::BadStatus {
                url: url.to_owned(),
                status,
            });
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_owned(),
            source,
        })
    }
}
