use serde::Deserialize;

use super::{null_as_default, GameRunTime, Run};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Leaderboard {
    #[serde(rename = "game")]
    pub game_id: String,
    #[serde(rename = "category")]
    pub category_id: String,
    #[serde(rename = "level", default, deserialize_with = "null_as_default")]
    pub level_id: String,
    #[serde(default)]
    pub timing: GameRunTime,
    #[serde(default)]
    pub runs: Vec<PlacedRun>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlacedRun {
    pub place: i32,
    pub run: Run,
}
