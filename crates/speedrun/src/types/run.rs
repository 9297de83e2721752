use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::envelope::Link;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Run {
    pub id: String,
    #[serde(default)]
    pub weblink: String,
    #[serde(rename = "game")]
    pub game_id: String,
    #[serde(rename = "category")]
    pub category_id: String,
    /// Empty for full-game runs.
    #[serde(rename = "level", default, deserialize_with = "null_as_default")]
    pub level_id: String,
    #[serde(default)]
    pub videos: Option<RunVideos>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    pub status: RunStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submitted: String,
    #[serde(default)]
    pub players: Vec<RunPlayer>,
    #[serde(default)]
    pub times: RunTimes,
    #[serde(default)]
    pub splits: Option<Link>,
    /// Variable id to value id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RunVideos {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunStatus {
    pub status: RunStatusValue,
    #[serde(rename = "examiner", default, deserialize_with = "null_as_default")]
    pub examiner_id: String,
    #[serde(default)]
    pub verify_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
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
pub enum RunStatusValue {
    New,
    Verified,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RunPlayer {
    pub rel: RunPlayerRel,
    /// Set for registered users.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Set for guests.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub uri: String,
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
pub enum RunPlayerRel {
    User,
    Guest,
}

/// Times in seconds. Zero means the timing method was not used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct RunTimes {
    #[serde(rename = "primary_t", default)]
    pub primary: f64,
    #[serde(rename = "realtime_t", default)]
    pub realtime: f64,
    #[serde(rename = "realtime_noloads_t", default)]
    pub realtime_noloads: f64,
    #[serde(rename = "ingame_t", default)]
    pub ingame: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_game_run_has_no_level() {
        let run: Run = serde_json::from_str(
            r#"{
                "id": "y8dwozoj",
                "game": "o1y9wo6q",
                "category": "wkpoo02r",
                "level": null,
                "videos": {"links": [{"uri": "https://youtu.be/abc"}]},
                "comment": null,
                "status": {"status": "verified", "examiner": "zx7gd1yx", "verify-date": "2019-12-09T21:56:41Z"},
                "date": "2019-12-08",
                "submitted": "2019-12-09T00:26:48Z",
                "players": [
                    {"rel": "user", "id": "zx7gd1yx", "uri": "https://www.speedrun.com/api/v1/users/zx7gd1yx"},
                    {"rel": "guest", "name": "Alex", "uri": "https://www.speedrun.com/api/v1/guests/Alex"}
                ],
                "times": {"primary_t": 5809.0, "realtime_t": 5809.0, "realtime_noloads_t": 0, "ingame_t": 0},
                "splits": null,
                "values": {"e8m7em86": "9qj7z0oq"}
            }"#,
        )
        .unwrap();

        assert!(run.level_id.is_empty());
        assert_eq!(run.status.status, RunStatusValue::Verified);
        assert!(run.status.verify_date.is_some());
        assert_eq!(run.players[1].rel, RunPlayerRel::Guest);
        assert_eq!(run.players[1].name, "Alex");
        assert!(run.videos.unwrap().text.is_empty());
    }
}
