//! Client for the speedrun.com REST API, built to sit under a GraphQL
//! resolver tree.
//!
//! A [`Client`] is created once per process. Each incoming operation opens a
//! [`Session`], which deduplicates and batches entity fetches for as long as
//! it lives:
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use speedrun::{Client, NativeFetcher, DEFAULT_BASE_URL};
//!
//! let client = Client::new(DEFAULT_BASE_URL, NativeFetcher::runtime_fetcher()?);
//! let session = client.session();
//!
//! let game = session.get_game("o1y9wo6q").await?;
//! # Ok(())
//! # }
//! ```

mod accessors;
mod cursor;
mod envelope;
mod error;
mod fetch;
pub mod filters;
mod loader;
mod options;
mod session;
pub mod types;

pub use cursor::Cursor;
pub use envelope::{find_link, Envelope, Link, PageInfo, Response};
pub use error::{Error, ErrorCode, FetchError, Result};
pub use fetch::{FetchResponse, FetchResult, Fetcher, FetcherInner, NativeFetcher};
pub use loader::{EntityKey, EntityLoader, LoadResult, LoaderConfig};
pub use options::{FetchOptions, OrderDirection};
pub use session::{Client, Session, DEFAULT_BASE_URL};
