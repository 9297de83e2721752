use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::envelope::Link;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct User {
    pub id: String,
    pub names: UserNames,
    #[serde(default)]
    pub weblink: String,
    pub name_style: UserNameStyle,
    pub role: UserRole,
    #[serde(default)]
    pub signup: Option<DateTime<Utc>>,
    #[serde(default)]
    pub twitch: Option<Link>,
    #[serde(default)]
    pub hitbox: Option<Link>,
    #[serde(default)]
    pub youtube: Option<Link>,
    #[serde(default)]
    pub twitter: Option<Link>,
    #[serde(default)]
    pub speedrunslive: Option<Link>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserNames {
    pub international: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub japanese: String,
}

/// Solid styles carry `color`, gradients carry `color-from` and `color-to`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserNameStyle {
    pub style: UserNameStyleValue,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub color_from: Option<Color>,
    #[serde(default)]
    pub color_to: Option<Color>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Color {
    pub light: String,
    pub dark: String,
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
pub enum UserNameStyleValue {
    Solid,
    Gradient,
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
pub enum UserRole {
    User,
    Banned,
    Trusted,
    Moderator,
    Admin,
    Programmer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_style_has_both_ends() {
        let style: UserNameStyle = serde_json::from_str(
            r##"{
                "style": "gradient",
                "color-from": {"light": "#8A2BE2", "dark": "#B57EDC"},
                "color-to": {"light": "#0000FF", "dark": "#6666FF"}
            }"##,
        )
        .unwrap();

        assert_eq!(style.style, UserNameStyleValue::Gradient);
        assert!(style.color.is_none());
        assert_eq!(style.color_to.unwrap().dark, "#6666FF");
    }
}
