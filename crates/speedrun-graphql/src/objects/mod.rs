//! Output objects. Each wraps one upstream value and the session it was read
//! through, so relations resolve through the same loader.

mod category;
mod game;
mod leaderboard;
mod level;
mod link;
mod run;
mod taxonomy;
mod user;
mod variable;

pub use category::Category;
pub use game::Game;
pub use leaderboard::{Leaderboard, PlacedRun};
pub use level::Level;
pub use link::{Color, Link};
pub use run::Run;
pub use taxonomy::{Engine, Genre, Platform, Region};
pub use user::User;
pub use variable::{Variable, VariableValue};

pub(crate) use game::list_games;
pub(crate) use run::list_runs;
pub(crate) use taxonomy::{list_genres, list_platforms};
pub(crate) use user::list_users;

/// The upstream sends absent strings as empty ones.
fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
