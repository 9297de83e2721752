use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::envelope::{find_link, Link};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Variable {
    pub id: String,
    pub name: String,
    /// Empty when the variable applies to every category.
    #[serde(rename = "category", default, deserialize_with = "null_as_default")]
    pub category_id: String,
    pub scope: VariableScope,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub user_defined: bool,
    #[serde(default)]
    pub obsoletes: bool,
    pub values: VariableValues,
    #[serde(default)]
    pub is_subcategory: bool,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Variable {
    /// Absolute url of the owning game.
    pub fn game_link(&self) -> Option<&str> {
        find_link(&self.links, "game")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VariableScope {
    #[serde(rename = "type")]
    pub kind: VariableScopeType,
    /// Only set for `single-level` scopes.
    #[serde(rename = "level", default, deserialize_with = "null_as_default")]
    pub level_id: String,
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
pub enum VariableScopeType {
    Global,
    FullGame,
    AllLevels,
    SingleLevel,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VariableValues {
    /// Value id to value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: BTreeMap<String, VariableValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VariableValue {
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: String,
    #[serde(default)]
    pub flags: Option<VariableValueFlags>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VariableValueFlags {
    #[serde(default)]
    pub miscellaneous: bool,
}

impl VariableValues {
    /// Values sorted by id, paired with their id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableValue)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_level_scope() {
        let variable: Variable = serde_json::from_str(
            r#"{
                "id": "e8m7em86",
                "name": "Stars",
                "category": null,
                "scope": {"type": "single-level", "level": "rdnoro6w"},
                "mandatory": true,
                "user-defined": false,
                "obsoletes": true,
                "values": {
                    "values": {
                        "9qj7z0oq": {"label": "120 Star", "rules": null, "flags": {"miscellaneous": false}},
                        "21d4zvp1": {"label": "70 Star"}
                    },
                    "default": "9qj7z0oq"
                },
                "is-subcategory": true,
                "links": [{"rel": "game", "uri": "https://www.speedrun.com/api/v1/games/o1y9wo6q"}]
            }"#,
        )
        .unwrap();

        assert_eq!(variable.scope.kind, VariableScopeType::SingleLevel);
        assert_eq!(variable.scope.level_id, "rdnoro6w");
        assert!(variable.category_id.is_empty());

        let labels: Vec<_> = variable.values.iter().map(|(id, value)| (id, value.label.as_str())).collect();
        assert_eq!(labels, [("21d4zvp1", "70 Star"), ("9qj7z0oq", "120 Star")]);
        assert_eq!(variable.game_link(), Some("https://www.speedrun.com/api/v1/games/o1y9wo6q"));
    }
}
