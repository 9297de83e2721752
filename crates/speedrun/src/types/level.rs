use serde::Deserialize;

use super::null_as_default;
use crate::envelope::{find_link, Link};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Level {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub weblink: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: String,
    #[serde(default, alias = "link")]
    pub links: Vec<Link>,
}

impl Level {
    /// Absolute url of the owning game.
    pub fn game_link(&self) -> Option<&str> {
        find_link(&self.links, "game")
    }
}
