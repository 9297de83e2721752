//! Wire shapes of the upstream entities.
//!
//! Field names follow the upstream JSON. Strings the upstream sometimes
//! leaves empty are decoded with `#[serde(default)]` so a missing key and an
//! empty value read the same.

mod category;
mod game;
mod leaderboard;
mod level;
mod run;
mod taxonomy;
mod user;
mod variable;

pub use category::{Category, CategoryPlayers, CategoryPlayersType, CategoryType};
pub use game::{Game, GameAsset, GameAssetKind, GameModeratorRole, GameNames, GameRuleset, GameRunTime};
pub use leaderboard::{Leaderboard, PlacedRun};
pub use level::Level;
pub use run::{Run, RunPlayer, RunPlayerRel, RunStatus, RunStatusValue, RunTimes, RunVideos};
pub use taxonomy::{Engine, Genre, Platform, Region};
pub use user::{Color, User, UserNameStyle, UserNameStyleValue, UserNames, UserRole};
pub use variable::{Variable, VariableScope, VariableScopeType, VariableValue, VariableValueFlags, VariableValues};

/// Deserializes `null` as the type's default, for fields the upstream sends
/// as either an empty string or `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::{fmt::Debug, str::FromStr};

    use serde::{de::DeserializeOwned, Serialize};
    use strum::IntoEnumIterator;

    use super::*;

    fn assert_round_trip<E>()
    where
        E: IntoEnumIterator + Serialize + DeserializeOwned + FromStr + AsRef<str> + PartialEq + Debug + Copy,
        <E as FromStr>::Err: Debug,
    {
        for value in E::iter() {
            let token = value.as_ref().to_string();

            let json = serde_json::to_value(value).unwrap();
            assert_eq!(json, serde_json::Value::String(token.clone()));

            let decoded: E = serde_json::from_value(json).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(E::from_str(&token).unwrap(), value);
        }
    }

    #[test]
    fn wire_enums_round_trip() {
        assert_round_trip::<GameRunTime>();
        assert_round_trip::<GameModeratorRole>();
        assert_round_trip::<GameAssetKind>();
        assert_round_trip::<CategoryType>();
        assert_round_trip::<CategoryPlayersType>();
        assert_round_trip::<RunStatusValue>();
        assert_round_trip::<RunPlayerRel>();
        assert_round_trip::<UserNameStyleValue>();
        assert_round_trip::<UserRole>();
        assert_round_trip::<VariableScopeType>();
    }

    #[test]
    fn irregular_wire_tokens() {
        assert_eq!(GameRunTime::RealtimeNoloads.as_ref(), "realtime_noloads");
        assert_eq!(GameModeratorRole::SuperModerator.as_ref(), "super-moderator");
        assert_eq!(GameAssetKind::TrophyFirst.as_ref(), "trophy-1st");
        assert_eq!(CategoryPlayersType::UpTo.as_ref(), "up-to");
        assert_eq!(VariableScopeType::SingleLevel.as_ref(), "single-level");
        assert_eq!("realtime_noloads".parse::<GameRunTime>().unwrap(), GameRunTime::RealtimeNoloads);
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!("super_moderator".parse::<GameModeratorRole>().is_err());
        assert!(serde_json::from_str::<RunStatusValue>("\"pending\"").is_err());
    }
}
