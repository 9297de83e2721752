use std::{sync::Arc, time::Duration};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::FetchError;

pub type FetchResult<T> = Result<T, FetchError>;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub bytes: Bytes,
}

/// The transport under the fetch executor. Production uses [`NativeFetcher`],
/// tests can plug in anything that answers a GET.
#[async_trait::async_trait]
pub trait FetcherInner: Send + Sync {
    async fn get(&self, url: &Url) -> FetchResult<FetchResponse>;
}

#[derive(Clone)]
pub struct Fetcher {
    inner: Arc<dyn FetcherInner>,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(fetcher: impl FetcherInner + 'static) -> Fetcher {
        Fetcher {
            inner: Arc::new(fetcher),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Issues one GET and decodes the body into `T`.
    ///
    /// Any status above 299 is an error carrying the url and the status.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> FetchResult<T> {
        let response = tokio::time::timeout(self.timeout, self.inner.get(url))
            .await
            .map_err(|_| FetchError::Timeout { url: url.to_string() })??;

        tracing::debug!(url = %url, status = response.status, "upstream responded");

        if response.status > 299 {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.bytes).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher").field("timeout", &self.timeout).finish_non_exhaustive()
    }
}

pub struct NativeFetcher {
    client: reqwest::Client,
}

impl NativeFetcher {
    pub fn runtime_fetcher() -> reqwest::Result<Fetcher> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("speedrungql/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Fetcher::new(Self { client }))
    }
}

#[async_trait::async_trait]
impl FetcherInner for NativeFetcher {
    async fn get(&self, url: &Url) -> FetchResult<FetchResponse> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::transport(url.as_str(), e))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(url.as_str(), e))?;

        Ok(FetchResponse { status, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static(u16, &'static str);

    #[async_trait::async_trait]
    impl FetcherInner for Static {
        async fn get(&self, _url: &Url) -> FetchResult<FetchResponse> {
            Ok(FetchResponse {
                status: self.0,
                bytes: Bytes::from_static(self.1.as_bytes()),
            })
        }
    }

    struct Stalled;

    #[async_trait::async_trait]
    impl FetcherInner for Stalled {
        async fn get(&self, _url: &Url) -> FetchResult<FetchResponse> {
            std::future::pending().await
        }
    }

    fn url() -> Url {
        Url::parse("https://www.speedrun.com/api/v1/games/abc").unwrap()
    }

    #[tokio::test]
    async fn status_above_299_is_an_error() {
        let fetcher = Fetcher::new(Static(503, "{}"));
        let error = fetcher.get_json::<serde_json::Value>(&url()).await.unwrap_err();

        assert!(matches!(error, FetchError::Status { status: 503, .. }));
        assert_eq!(error.url(), "https://www.speedrun.com/api/v1/games/abc");
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let fetcher = Fetcher::new(Static(200, "{\"data\": "));
        let error = fetcher.get_json::<serde_json::Value>(&url()).await.unwrap_err();

        assert!(matches!(error, FetchError::Decode { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_upstream_times_out() {
        let fetcher = Fetcher::new(Stalled).with_timeout(Duration::from_secs(1));
        let error = fetcher.get_json::<serde_json::Value>(&url()).await.unwrap_err();

        assert!(matches!(error, FetchError::Timeout { .. }));
    }
}
