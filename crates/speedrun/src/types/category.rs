use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::envelope::{find_link, Link};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub weblink: String,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: String,
    pub players: CategoryPlayers,
    #[serde(default)]
    pub miscellaneous: bool,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Category {
    /// Absolute url of the owning game.
    pub fn game_link(&self) -> Option<&str> {
        find_link(&self.links, "game")
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CategoryType {
    PerGame,
    PerLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryPlayers {
    #[serde(rename = "type")]
    pub kind: CategoryPlayersType,
    pub value: i32,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CategoryPlayersType {
    Exactly,
    UpTo,
}
