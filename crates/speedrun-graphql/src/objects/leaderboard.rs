use async_graphql::{Object, Result};
use speedrun::{types as wire, Session};

use super::{Category, Game, Level, Run};
use crate::{enums::GameRunTime, error::invalid_argument, error::WithCode};

/// The ranked runs of one category, or of one category of one level.
pub struct Leaderboard {
    data: wire::Leaderboard,
    session: Session,
}

impl Leaderboard {
    pub fn new(data: wire::Leaderboard, session: Session) -> Self {
        Leaderboard { data, session }
    }
}

#[Object]
impl Leaderboard {
    async fn game(&self) -> Result<Option<Game>> {
        let game = self.session.get_game(&self.data.game_id).await.with_code()?;
        Ok(game.map(|game| Game::new(game, self.session.clone())))
    }

    async fn category(&self) -> Result<Option<Category>> {
        let category = self.session.get_category(&self.data.category_id).await.with_code()?;
        Ok(category.map(|category| Category::new(category, self.session.clone())))
    }

    async fn level(&self) -> Result<Option<Level>> {
        let level = self.session.get_level(&self.data.level_id).await.with_code()?;
        Ok(level.map(|level| Level::new(level, self.session.clone())))
    }

    async fn timing(&self) -> GameRunTime {
        self.data.timing.into()
    }

    /// The top `first` placed runs, all of them when `first` is absent.
    async fn runs(&self, first: Option<i32>) -> Result<Vec<PlacedRun>> {
        let take = match first {
            Some(first) => usize::try_from(first)
                .map_err(|_| invalid_argument("first must not be negative"))
                .with_code()?,
            None => self.data.runs.len(),
        };

        Ok(self
            .data
            .runs
            .iter()
            .take(take)
            .map(|placed| PlacedRun::new(placed.clone(), self.session.clone()))
            .collect())
    }
}

pub struct PlacedRun {
    data: wire::PlacedRun,
    session: Session,
}

impl PlacedRun {
    pub fn new(data: wire::PlacedRun, session: Session) -> Self {
        PlacedRun { data, session }
    }
}

#[Object]
impl PlacedRun {
    async fn place(&self) -> i32 {
        self.data.place
    }

    async fn run(&self) -> Run {
        Run::new(self.data.run.clone(), self.session.clone())
    }
}
