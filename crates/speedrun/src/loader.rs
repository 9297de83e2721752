//! The request-scoped entity loader.
//!
//! Every entity fetch goes through one [`EntityLoader`] per session. The first
//! load of a key registers a pending request and queues the key; every later
//! load of the same key, while pending or after it settled, shares that one
//! result. Queued keys are dispatched together once the batch is full or the
//! batch window elapses, one concurrent GET per key.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use futures_util::{
    future::{join_all, BoxFuture, Shared},
    FutureExt,
};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{envelope::Envelope, error::FetchError, fetch::Fetcher};

pub type LoadResult = Result<Arc<Envelope>, Arc<FetchError>>;

type PendingRequest = Shared<BoxFuture<'static, LoadResult>>;

/// Canonical absolute url of one fetchable entity.
///
/// The loader never inspects the shape of a key, callers normalize ids into
/// keys before loading.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(Arc<str>);

impl EntityKey {
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        EntityKey(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// A batch is dispatched as soon as it holds this many keys.
    pub max_batch_size: usize,
    /// How long the first queued key waits for others to join its batch.
    pub delay: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            max_batch_size: 100,
            delay: Duration::from_millis(1),
        }
    }
}

#[derive(Clone)]
pub struct EntityLoader {
    inner: Arc<LoaderInner>,
}

struct LoaderInner {
    fetcher: Fetcher,
    config: LoaderConfig,
    cancellation: CancellationToken,
    state: Mutex<LoaderState>,
}

#[derive(Default)]
struct LoaderState {
    /// Every key seen in this scope. Entries are never evicted.
    entries: HashMap<EntityKey, PendingRequest>,
    queue: Vec<(EntityKey, oneshot::Sender<LoadResult>)>,
}

impl EntityLoader {
    pub fn new(fetcher: Fetcher, config: LoaderConfig, cancellation: CancellationToken) -> Self {
        let config = LoaderConfig {
            max_batch_size: config.max_batch_size.max(1),
            ..config
        };

        EntityLoader {
            inner: Arc::new(LoaderInner {
                fetcher,
                config,
                cancellation,
                state: Mutex::default(),
            }),
        }
    }

    pub async fn load(&self, key: EntityKey) -> LoadResult {
        self.register(key).await
    }

    /// Loads every key in one round and returns the per-key results in key
    /// order.
    pub async fn load_all(&self, keys: impl IntoIterator<Item = EntityKey>) -> Vec<LoadResult> {
        let pending: Vec<_> = keys.into_iter().map(|key| self.register(key)).collect();
        join_all(pending).await
    }

    /// Like [`EntityLoader::load_all`], failing with the first error in key
    /// order.
    pub async fn load_many(
        &self,
        keys: impl IntoIterator<Item = EntityKey>,
    ) -> Result<Vec<Arc<Envelope>>, Arc<FetchError>> {
        self.load_all(keys).await.into_iter().collect()
    }

    fn register(&self, key: EntityKey) -> PendingRequest {
        let mut state = self.inner.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(pending) = state.entries.get(&key) {
            tracing::trace!(key = %key, "attaching waiter to pending request");
            return pending.clone();
        }

        let (sender, receiver) = oneshot::channel();
        let url = key.to_string();

        let pending = receiver
            .map(move |result| result.unwrap_or_else(|_| Err(Arc::new(FetchError::Cancelled { url }))))
            .boxed()
            .shared();

        state.entries.insert(key.clone(), pending.clone());

        let first_in_batch = state.queue.is_empty();
        state.queue.push((key, sender));

        if state.queue.len() >= self.inner.config.max_batch_size {
            let batch = std::mem::take(&mut state.queue);
            tokio::spawn(self.inner.clone().dispatch(batch));
        } else if first_in_batch {
            tokio::spawn(self.inner.clone().dispatch_after_delay());
        }

        pending
    }
}

impl LoaderInner {
    async fn dispatch_after_delay(self: Arc<Self>) {
        if self.config.delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.config.delay).await;
        }

        let batch = std::mem::take(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner).queue);

        // A full batch may have been dispatched in the meantime.
        if !batch.is_empty() {
            self.dispatch(batch).await;
        }
    }

    async fn dispatch(self: Arc<Self>, batch: Vec<(EntityKey, oneshot::Sender<LoadResult>)>) {
        tracing::debug!(size = batch.len(), "dispatching batch");

        let fetches = batch.into_iter().map(|(key, sender)| {
            let inner = &self;

            async move {
                let result = inner.fetch(&key).await;

                if let Err(error) = &result {
                    tracing::warn!(key = %key, error = %error, "upstream fetch failed");
                }

                // Every waiter may be gone already.
                let _ = sender.send(result);
            }
        });

        join_all(fetches).await;
    }

    async fn fetch(&self, key: &EntityKey) -> LoadResult {
        let url = Url::parse(key.as_str()).map_err(|source| {
            Arc::new(FetchError::InvalidUrl {
                url: key.to_string(),
                source,
            })
        })?;

        tokio::select! {
            biased;
            () = self.cancellation.cancelled() => Err(Arc::new(FetchError::Cancelled { url: key.to_string() })),
            result = self.fetcher.get_json::<Envelope>(&url) => result.map(Arc::new).map_err(Arc::new),
        }
    }
}

impl fmt::Debug for EntityLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityLoader")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::fetch::{FetchResponse, FetchResult, FetcherInner};

    /// Answers every url with its last path segment as the entity id, or a
    /// 500 when the url mentions `broken`.
    #[derive(Clone, Default)]
    struct Recording {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Recording {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl FetcherInner for Recording {
        async fn get(&self, url: &Url) -> FetchResult<FetchResponse> {
            self.calls.lock().unwrap().push(url.to_string());
            tokio::task::yield_now().await;

            if url.as_str().contains("broken") {
                return Ok(FetchResponse {
                    status: 500,
                    bytes: Bytes::new(),
                });
            }

            let id = url.path_segments().and_then(|mut segments| segments.next_back()).unwrap_or_default();
            let body = format!(r#"{{"data": {{"id": "{id}"}}}}"#);

            Ok(FetchResponse {
                status: 200,
                bytes: Bytes::from(body),
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

    fn key(id: &str) -> EntityKey {
        EntityKey::new(format!("https://www.speedrun.com/api/v1/platforms/{id}"))
    }

    fn loader(fetcher: impl FetcherInner + 'static, config: LoaderConfig) -> EntityLoader {
        EntityLoader::new(Fetcher::new(fetcher), config, CancellationToken::new())
    }

    fn id_of(envelope: &Envelope) -> String {
        let value: serde_json::Value = envelope.decode().unwrap().unwrap();
        value["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn concurrent_loads_of_one_key_share_one_fetch() {
        let recording = Recording::default();
        let loader = loader(recording.clone(), LoaderConfig::default());

        let results = join_all((0..8).map(|_| loader.load(key("n64")))).await;

        assert_eq!(recording.calls().len(), 1);
        for result in results {
            assert_eq!(id_of(&result.unwrap()), "n64");
        }
    }

    #[tokio::test]
    async fn settled_results_are_memoized() {
        let recording = Recording::default();
        let loader = loader(recording.clone(), LoaderConfig::default());

        loader.load(key("n64")).await.unwrap();
        loader.load(key("n64")).await.unwrap();
        loader.load(key("broken")).await.unwrap_err();
        loader.load(key("broken")).await.unwrap_err();

        assert_eq!(recording.calls().len(), 2);
    }

    #[tokio::test]
    async fn failures_stay_with_their_key() {
        let recording = Recording::default();
        let loader = loader(recording.clone(), LoaderConfig::default());

        let results = loader.load_all([key("broken"), key("wii")]).await;

        assert!(matches!(*results[0].clone().unwrap_err(), FetchError::Status { status: 500, .. }));
        assert_eq!(id_of(&results[1].clone().unwrap()), "wii");
        assert_eq!(recording.calls().len(), 2);
    }

    #[tokio::test]
    async fn load_many_reports_the_first_error() {
        let loader = loader(Recording::default(), LoaderConfig::default());

        let error = loader
            .load_many([key("wii"), key("broken-a"), key("broken-b")])
            .await
            .unwrap_err();

        assert_eq!(error.url(), "https://www.speedrun.com/api/v1/platforms/broken-a");
    }

    #[tokio::test(start_paused = true)]
    async fn partial_batch_waits_for_the_window() {
        let config = LoaderConfig {
            max_batch_size: 3,
            delay: Duration::from_millis(50),
        };
        let loader = loader(Recording::default(), config);

        let start = tokio::time::Instant::now();
        loader.load_many([key("a"), key("b")]).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn full_batch_is_dispatched_immediately() {
        let config = LoaderConfig {
            max_batch_size: 3,
            delay: Duration::from_secs(60),
        };
        let loader = loader(Recording::default(), config);

        let start = tokio::time::Instant::now();
        loader.load_many([key("a"), key("b"), key("c")]).await.unwrap();

        assert!(start.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn cancellation_reaches_every_waiter() {
        let token = CancellationToken::new();
        let loader = EntityLoader::new(Fetcher::new(Stalled), LoaderConfig::default(), token.clone());

        let first = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load(key("n64")).await }
        });
        let second = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load(key("n64")).await }
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();

        for handle in [first, second] {
            let error = handle.await.unwrap().unwrap_err();
            assert!(matches!(*error, FetchError::Cancelled { .. }));
        }
    }
}
