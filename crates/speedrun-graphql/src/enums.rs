//! GraphQL enums, each mirroring one upstream enum variant for variant.

use async_graphql::Enum;

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::GameRunTime")]
pub enum GameRunTime {
    Realtime,
    RealtimeNoloads,
    Ingame,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::GameModeratorRole")]
pub enum GameModeratorRole {
    Moderator,
    SuperModerator,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::GameAssetKind")]
pub enum GameAssetKind {
    Logo,
    CoverTiny,
    CoverSmall,
    CoverMedium,
    CoverLarge,
    Icon,
    #[graphql(name = "TROPHY_1ST")]
    TrophyFirst,
    #[graphql(name = "TROPHY_2ND")]
    TrophySecond,
    #[graphql(name = "TROPHY_3RD")]
    TrophyThird,
    #[graphql(name = "TROPHY_4TH")]
    TrophyFourth,
    Background,
    Foreground,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::CategoryType")]
pub enum CategoryType {
    PerGame,
    PerLevel,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::CategoryPlayersType")]
pub enum CategoryPlayersType {
    Exactly,
    UpTo,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::RunStatusValue")]
pub enum RunStatusValue {
    New,
    Verified,
    Rejected,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::UserRole")]
pub enum UserRole {
    User,
    Banned,
    Trusted,
    Moderator,
    Admin,
    Programmer,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::types::VariableScopeType")]
pub enum VariableScopeType {
    Global,
    FullGame,
    AllLevels,
    SingleLevel,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::OrderDirection")]
pub enum OrderDirection {
    Asc,
    Desc,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::filters::GameOrderField")]
pub enum GameOrderField {
    NameInt,
    NameJap,
    Abbreviation,
    Released,
    Created,
    Similarity,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::filters::RunOrderField")]
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

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::filters::UserOrderField")]
pub enum UserOrderField {
    NameInt,
    NameJap,
    Signup,
    Role,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::filters::GenreOrderField")]
pub enum GenreOrderField {
    Name,
}

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
#[graphql(remote = "speedrun::filters::PlatformOrderField")]
pub enum PlatformOrderField {
    Name,
    Released,
}

/// Which of a game's names to read.
#[derive(Enum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameNameVariant {
    #[default]
    International,
    Japanese,
    Twitch,
}

/// Which of a user's names to read.
#[derive(Enum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserNameVariant {
    #[default]
    International,
    Japanese,
}
