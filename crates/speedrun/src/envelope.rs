use serde::{de::DeserializeOwned, Deserialize};
use serde_json::value::RawValue;

/// The generic `{ data, pagination }` wrapper every endpoint answers with.
///
/// `data` stays raw until a typed accessor knows what to decode it into, so a
/// single loader can serve every entity kind.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
    #[serde(default)]
    pub pagination: Option<PageInfo>,
}

impl Envelope {
    /// Decodes `data` into `T`. Absent or `null` data decodes to `None`.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<Option<T>> {
        self.data.as_deref().map(|raw| serde_json::from_str(raw.get())).transpose()
    }
}

/// Envelope decoded straight into its target shape, used by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<PageInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub max: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl PageInfo {
    /// The upstream gives no total, so a full page is taken to mean there may
    /// be another one. An exactly-full last page reports a next page that
    /// turns out empty.
    pub fn has_next_page(&self) -> bool {
        self.max == self.size
    }

    pub fn has_previous_page(&self) -> bool {
        self.offset > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub rel: Option<String>,
    pub uri: String,
}

/// Returns the uri of the first link with the given relation.
pub fn find_link<'a>(links: &'a [Link], rel: &str) -> Option<&'a str> {
    links
        .iter()
        .find(|link| link.rel.as_deref() == Some(rel))
        .map(|link| link.uri.as_str())
}
