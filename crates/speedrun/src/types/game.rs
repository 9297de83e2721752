use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Game {
    pub id: String,
    pub names: GameNames,
    #[serde(default, deserialize_with = "null_as_default")]
    pub abbreviation: String,
    #[serde(default)]
    pub weblink: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default)]
    pub ruleset: GameRuleset,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engines: Vec<String>,
    /// User id to role.
    #[serde(default, deserialize_with = "null_as_default")]
    pub moderators: BTreeMap<String, GameModeratorRole>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: BTreeMap<GameAssetKind, Option<GameAsset>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GameNames {
    pub international: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub japanese: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub twitch: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GameRuleset {
    #[serde(default)]
    pub show_milliseconds: bool,
    #[serde(default)]
    pub require_verification: bool,
    #[serde(default)]
    pub require_video: bool,
    #[serde(default)]
    pub run_times: Vec<GameRunTime>,
    #[serde(rename = "default-time", default)]
    pub default_run_time: GameRunTime,
    #[serde(default)]
    pub emulators_allowed: bool,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum GameRunTime {
    #[default]
    #[serde(rename = "realtime")]
    #[strum(serialize = "realtime")]
    Realtime,
    #[serde(rename = "realtime_noloads")]
    #[strum(serialize = "realtime_noloads")]
    RealtimeNoloads,
    #[serde(rename = "ingame")]
    #[strum(serialize = "ingame")]
    Ingame,
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
pub enum GameModeratorRole {
    Moderator,
    SuperModerator,
}

/// Keys of the game asset map. Ordered the way the upstream lists them.
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
pub enum GameAssetKind {
    Logo,
    CoverTiny,
    CoverSmall,
    CoverMedium,
    CoverLarge,
    Icon,
    #[serde(rename = "trophy-1st")]
    #[strum(serialize = "trophy-1st")]
    TrophyFirst,
    #[serde(rename = "trophy-2nd")]
    #[strum(serialize = "trophy-2nd")]
    TrophySecond,
    #[serde(rename = "trophy-3rd")]
    #[strum(serialize = "trophy-3rd")]
    TrophyThird,
    #[serde(rename = "trophy-4th")]
    #[strum(serialize = "trophy-4th")]
    TrophyFourth,
    Background,
    Foreground,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GameAsset {
    pub uri: String,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

impl Game {
    /// Moderators sorted by user id, the order the map already iterates in.
    pub fn moderator_roles(&self) -> impl Iterator<Item = (&str, GameModeratorRole)> {
        self.moderators.iter().map(|(id, role)| (id.as_str(), *role))
    }

    /// Assets that are present, in asset kind order.
    pub fn present_assets(&self) -> impl Iterator<Item = (GameAssetKind, &GameAsset)> {
        self.assets
            .iter()
            .filter_map(|(kind, asset)| asset.as_ref().map(|asset| (*kind, asset)))
    }
}
