use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tokio_util::sync::{CancellationToken, DropGuard};
use url::Url;

use crate::{
    envelope::Response,
    error::{Error, FetchError, Result},
    fetch::Fetcher,
    loader::{EntityKey, EntityLoader, LoaderConfig},
    options::FetchOptions,
};

pub const DEFAULT_BASE_URL: &str = "https://www.speedrun.com/api/v1";

// RFC 3986 unreserved characters stay as they are.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'.').remove(b'-').remove(b'~');

/// Long-lived handle to the upstream. Holds no entity data; every incoming
/// request gets its own [`Session`] from it.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Arc<str>,
    fetcher: Fetcher,
    loader_config: LoaderConfig,
}

impl Client {
    pub fn new(base_url: &str, fetcher: Fetcher) -> Self {
        Client {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            fetcher,
            loader_config: LoaderConfig::default(),
        }
    }

    #[must_use]
    pub fn with_loader_config(mut self, config: LoaderConfig) -> Self {
        self.loader_config = config;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Session {
        self.session_with(&CancellationToken::new())
    }

    /// A session that is also cancelled when `parent` is.
    pub fn session_with(&self, parent: &CancellationToken) -> Session {
        let cancellation = parent.child_token();
        let loader = EntityLoader::new(self.fetcher.clone(), self.loader_config, cancellation.clone());

        Session {
            inner: Arc::new(SessionInner {
                base_url: self.base_url.clone(),
                fetcher: self.fetcher.clone(),
                loader,
                _drop_guard: cancellation.clone().drop_guard(),
                cancellation,
            }),
        }
    }
}

/// The scope of one GraphQL operation.
///
/// Owns the pending-request table: entities are fetched at most once per
/// session. Dropping the last clone cancels whatever is still in flight.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    base_url: Arc<str>,
    fetcher: Fetcher,
    loader: EntityLoader,
    cancellation: CancellationToken,
    _drop_guard: DropGuard,
}

impl Session {
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn loader(&self) -> &EntityLoader {
        &self.inner.loader
    }

    pub fn cancel(&self) {
        self.inner.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancellation.is_cancelled()
    }

    /// Canonical key of an entity. Ids that already are absolute upstream
    /// urls of the same collection, as found in relation links, map to the
    /// same key as their raw id.
    pub fn entity_key(&self, collection: &str, id: &str) -> Result<EntityKey> {
        let raw = id
            .strip_prefix(self.base_url())
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|rest| rest.strip_prefix(collection))
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(id);

        Ok(EntityKey::new(format!(
            "{}/{collection}/{}",
            self.base_url(),
            path_segment(raw)?
        )))
    }

    /// Loads one entity through the loader.
    ///
    /// An empty id, a 404 and absent data all resolve to `None` so that a
    /// broken relation reads as null instead of failing.
    pub async fn load_entity<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Option<T>> {
        if id.is_empty() {
            return Ok(None);
        }

        let key = self.entity_key(collection, id)?;

        match self.inner.loader.load(key.clone()).await {
            Ok(envelope) => decode(&key, &envelope),
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    /// Loads several entities in one round. Missing entities are skipped,
    /// any other failure fails the whole call with the first error in id
    /// order.
    pub async fn load_entities<T: DeserializeOwned>(&self, collection: &str, ids: &[String]) -> Result<Vec<T>> {
        let keys: Vec<_> = ids
            .iter()
            .filter(|id| !id.is_empty())
            .map(|id| self.entity_key(collection, id))
            .collect::<Result<_>>()?;

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let results = self.inner.loader.load_all(keys.iter().cloned()).await;
        let mut entities = Vec::with_capacity(results.len());

        for (key, result) in keys.iter().zip(results) {
            match result {
                Ok(envelope) => entities.extend(decode(key, &envelope)?),
                Err(error) if error.is_not_found() => {}
                Err(error) => return Err(error.into()),
            }
        }

        Ok(entities)
    }

    /// Runs one list fetch. Lists are not identity-keyed, so this bypasses
    /// the loader.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, options: &FetchOptions) -> Result<Response<T>> {
        let mut url = format!("{}{path}", self.base_url());

        if let Some(query) = options.query_string() {
            url.push('?');
            url.push_str(&query);
        }

        let parsed = Url::parse(&url).map_err(|source| FetchError::InvalidUrl { url: url.clone(), source })?;

        tokio::select! {
            biased;
            () = self.inner.cancellation.cancelled() => Err(FetchError::Cancelled { url }.into()),
            result = self.inner.fetcher.get_json::<Response<T>>(&parsed) => result.map_err(|error| {
                tracing::warn!(url = %url, error = %error, "upstream list fetch failed");
                Error::from(error)
            }),
        }
    }

    /// Like [`Session::fetch`], with a 404 read as absent.
    pub(crate) async fn fetch_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &FetchOptions,
    ) -> Result<Option<Response<T>>> {
        match self.fetch(path, options).await {
            Ok(response) => Ok(Some(response)),
            Err(error) if error.as_fetch_error().is_some_and(FetchError::is_not_found) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.inner.base_url)
            .field("cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Escapes an id for use as one path segment of an upstream url. Dot
/// segments would walk the path and are rejected.
pub(crate) fn path_segment(id: &str) -> Result<String> {
    if id == "." || id == ".." {
        return Err(Error::InvalidArgument(format!("invalid id {id:?}")));
    }

    Ok(utf8_percent_encode(id, ID_SEGMENT).to_string())
}

fn decode<T: DeserializeOwned>(key: &EntityKey, envelope: &crate::envelope::Envelope) -> Result<Option<T>> {
    envelope.decode().map_err(|source| {
        Error::from(FetchError::Decode {
            url: key.to_string(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::NativeFetcher;

    fn client() -> Client {
        Client::new("https://www.speedrun.com/api/v1/", NativeFetcher::runtime_fetcher().unwrap())
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(client().base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn raw_and_absolute_ids_share_a_key() {
        let session = client().session();

        let raw = session.entity_key("platforms", "w89rwelk").unwrap();
        let absolute = session
            .entity_key("platforms", "https://www.speedrun.com/api/v1/platforms/w89rwelk")
            .unwrap();

        assert_eq!(raw, absolute);
    }

    #[tokio::test]
    async fn ids_cannot_leave_their_path_segment() {
        let session = client().session();

        let query = session.entity_key("users", "abc?x=1").unwrap();
        let nested = session.entity_key("users", "../users/foo").unwrap();
        let other_collection = session
            .entity_key("users", "https://www.speedrun.com/api/v1/games/o1y9wo6q")
            .unwrap();

        assert_eq!(query.to_string(), "https://www.speedrun.com/api/v1/users/abc%3Fx%3D1");
        assert_eq!(nested.to_string(), "https://www.speedrun.com/api/v1/users/..%2Fusers%2Ffoo");
        assert_eq!(
            other_collection.to_string(),
            "https://www.speedrun.com/api/v1/users/https%3A%2F%2Fwww.speedrun.com%2Fapi%2Fv1%2Fgames%2Fo1y9wo6q"
        );
    }

    #[tokio::test]
    async fn dot_segment_ids_are_rejected() {
        let session = client().session();
        let error = session.load_entity::<serde_json::Value>("users", "..").await.unwrap_err();

        assert_eq!(error.code(), crate::ErrorCode::BadRequest);
    }

    #[tokio::test]
    async fn empty_id_is_absent() {
        let session = client().session();
        let level: Option<serde_json::Value> = session.load_entity("levels", "").await.unwrap();

        assert!(level.is_none());
    }

    #[tokio::test]
    async fn parent_cancellation_reaches_the_session() {
        let parent = CancellationToken::new();
        let session = client().session_with(&parent);

        parent.cancel();
        assert!(session.is_cancelled());
    }
}
