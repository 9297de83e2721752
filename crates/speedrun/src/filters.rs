//! Typed filter and ordering arguments, lowered to the upstream's query keys.
//!
//! Every filter type spells out its own `(wire key, value)` table; there is no
//! reflection. Enum values are lowered to the hyphenated lowercase tokens the
//! upstream expects.

use crate::{
    error::{Error, Result},
    options::FetchOptions,
    types::RunStatusValue,
};

/// A filter struct that knows its own wire keys.
pub trait FilterTable {
    /// What the filtered list holds, used in error messages.
    const SUBJECT: &'static str;

    /// Every filter key with its value, `None` for unset fields.
    fn entries(&self) -> Vec<(&'static str, Option<String>)>;
}

/// An ordering field with an explicit wire token.
pub trait OrderField: Copy {
    fn as_wire(self) -> &'static str;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub released: Option<i32>,
    pub game_type: Option<String>,
    pub platform: Option<String>,
    pub region: Option<String>,
    pub genre: Option<String>,
    pub engine: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub moderator: Option<String>,
}

impl FilterTable for GameFilter {
    const SUBJECT: &'static str = "games";

    fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", self.name.clone()),
            ("abbreviation", self.abbreviation.clone()),
            ("released", self.released.map(|year| year.to_string())),
            ("gametype", self.game_type.clone()),
            ("platform", self.platform.clone()),
            ("region", self.region.clone()),
            ("genre", self.genre.clone()),
            ("engine", self.engine.clone()),
            ("developer", self.developer.clone()),
            ("publisher", self.publisher.clone()),
            ("moderator", self.moderator.clone()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunFilter {
    pub user: Option<String>,
    pub guest: Option<String>,
    pub examiner: Option<String>,
    pub game: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub region: Option<String>,
    pub emulated: Option<bool>,
    pub status: Option<RunStatusValue>,
}

impl FilterTable for RunFilter {
    const SUBJECT: &'static str = "runs";

    fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("user", self.user.clone()),
            ("guest", self.guest.clone()),
            ("examiner", self.examiner.clone()),
            ("game", self.game.clone()),
            ("level", self.level.clone()),
            ("category", self.category.clone()),
            ("platform", self.platform.clone()),
            ("region", self.region.clone()),
            ("emulated", self.emulated.map(|emulated| emulated.to_string())),
            ("status", self.status.map(|status| status.as_ref().to_string())),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub lookup: Option<String>,
    pub name: Option<String>,
    pub twitch: Option<String>,
    pub hitbox: Option<String>,
    pub twitter: Option<String>,
    pub speedrunslive: Option<String>,
}

impl FilterTable for UserFilter {
    const SUBJECT: &'static str = "users";

    fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("lookup", self.lookup.clone()),
            ("name", self.name.clone()),
            ("twitch", self.twitch.clone()),
            ("hitbox", self.hitbox.clone()),
            ("twitter", self.twitter.clone()),
            ("speedrunslive", self.speedrunslive.clone()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOrderField {
    NameInt,
    NameJap,
    Abbreviation,
    Released,
    Created,
    Similarity,
}

impl OrderField for GameOrderField {
    fn as_wire(self) -> &'static str {
        match self {
            GameOrderField::NameInt => "name.int",
            GameOrderField::NameJap => "name.jap",
            GameOrderField::Abbreviation => "abbreviation",
            GameOrderField::Released => "released",
            GameOrderField::Created => "created",
            GameOrderField::Similarity => "similarity",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunOrderField {
    Game,
    Category,
    Level,
    Platform,
    Region,
    Emulated,
    Date,
    Submitted,
    Status,
    VerifyDate,
}

impl OrderField for RunOrderField {
    fn as_wire(self) -> &'static str {
        match self {
            RunOrderField::Game => "game",
            RunOrderField::Category => "category",
            RunOrderField::Level => "level",
            RunOrderField::Platform => "platform",
            RunOrderField::Region => "region",
            RunOrderField::Emulated => "emulated",
            RunOrderField::Date => "date",
            RunOrderField::Submitted => "submitted",
            RunOrderField::Status => "status",
            RunOrderField::VerifyDate => "verify-date",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserOrderField {
    NameInt,
    NameJap,
    Signup,
    Role,
}

impl OrderField for UserOrderField {
    fn as_wire(self) -> &'static str {
        match self {
            UserOrderField::NameInt => "name.int",
            UserOrderField::NameJap => "name.jap",
            UserOrderField::Signup => "signup",
            UserOrderField::Role => "role",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenreOrderField {
    Name,
}

impl OrderField for GenreOrderField {
    fn as_wire(self) -> &'static str {
        match self {
            GenreOrderField::Name => "name",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformOrderField {
    Name,
    Released,
}

impl OrderField for PlatformOrderField {
    fn as_wire(self) -> &'static str {
        match self {
            PlatformOrderField::Name => "name",
            PlatformOrderField::Released => "released",
        }
    }
}

/// The relationship a list is read through, e.g. the runs of one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope {
    key: &'static str,
    owner: &'static str,
    id: String,
}

impl Scope {
    /// A scope whose filter key names its owner, like `category` for the
    /// runs of a category.
    pub fn new(key: &'static str, id: impl Into<String>) -> Self {
        Scope { key, owner: key, id: id.into() }
    }

    /// A scope whose filter key differs from its owner, like `moderator` for
    /// the games a user moderates.
    pub fn owned_by(key: &'static str, owner: &'static str, id: impl Into<String>) -> Self {
        Scope { key, owner, id: id.into() }
    }
}

/// Starts the options of a relationship-scoped list.
///
/// Rejects a user filter that sets the scoping key again, the same way for
/// every relationship.
pub fn scoped<F: FilterTable>(scope: &Scope, filter: Option<&F>) -> Result<FetchOptions> {
    let options = FetchOptions::new().filter(scope.key, scope.id.clone());

    let Some(filter) = filter else {
        return Ok(options);
    };

    let conflicting = filter
        .entries()
        .into_iter()
        .any(|(key, value)| key == scope.key && value.is_some());

    if conflicting {
        return Err(Error::InvalidArgument(format!(
            "cannot filter {} by {} when reading from a specific {}",
            F::SUBJECT,
            scope.key,
            scope.owner
        )));
    }

    Ok(options.filters(filter))
}
