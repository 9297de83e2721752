//! Relay global ids: `base64("<kind>:<raw id>")`.

use std::str::FromStr;

use async_graphql::ID;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// The entity a global id points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Category,
    Engine,
    Game,
    Genre,
    Level,
    Platform,
    Region,
    Run,
    User,
    Variable,
}

impl NodeKind {
    pub fn global_id(self, raw_id: &str) -> ID {
        ID(STANDARD.encode(format!("{self}:{raw_id}")))
    }
}

/// Splits a global id into its kind and raw id. The kind is returned as
/// written so callers can tell an unknown kind from a malformed id.
pub(crate) fn decode(id: &str) -> Option<(String, String)> {
    let bytes = STANDARD.decode(id).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let (kind, raw) = decoded.split_once(':')?;

    Some((kind.to_string(), raw.to_string()))
}

/// The upstream id behind an argument. Accepts both global ids and raw
/// upstream ids.
pub(crate) fn raw_id(id: &ID) -> String {
    match decode(id) {
        Some((kind, raw)) if NodeKind::from_str(&kind).is_ok() => raw,
        _ => id.0.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_id_layout() {
        let id = NodeKind::Game.global_id("o1y9wo6q");

        assert_eq!(id.as_str(), "Z2FtZTpvMXk5d282cQ==");
        assert_eq!(decode(&id), Some(("game".to_string(), "o1y9wo6q".to_string())));
    }

    #[test]
    fn raw_ids_pass_through() {
        assert_eq!(raw_id(&ID::from("o1y9wo6q")), "o1y9wo6q");
        assert_eq!(raw_id(&NodeKind::Variable.global_id("e8m7em86")), "e8m7em86");
    }

    #[test]
    fn unknown_kind_is_not_unwrapped() {
        let id = ID(STANDARD.encode("series:abc"));
        assert_eq!(raw_id(&id), id.0);
    }
}
