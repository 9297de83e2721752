use async_graphql::{connection::Connection, Object, Result, Union, ID};
use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use speedrun::{
    filters::{self, Scope},
    types as wire, FetchOptions, Session,
};

use super::{non_empty, Category, Game, Level, Link, User, Variable, VariableValue};
use crate::{
    connection::{connection, paged, OffsetCursor},
    enums::{GameRunTime, RunStatusValue},
    error::WithCode,
    id::{raw_id, NodeKind},
    inputs::{RunFilter, RunOrder},
};

#[derive(Clone, Debug)]
pub struct Run {
    data: wire::Run,
    session: Session,
}

impl Run {
    pub fn new(data: wire::Run, session: Session) -> Self {
        Run { data, session }
    }

    async fn variable_value(&self, variable_id: &str, value_id: &str) -> speedrun::Result<Option<VariableValue>> {
        let variable = self.session.get_variable(variable_id).await?;

        Ok(variable.and_then(|variable| Variable::new(variable, self.session.clone()).value_of(value_id)))
    }
}

#[Object]
impl Run {
    async fn id(&self) -> ID {
        NodeKind::Run.global_id(&self.data.id)
    }

    async fn raw_id(&self) -> &str {
        &self.data.id
    }

    async fn weblink(&self) -> &str {
        &self.data.weblink
    }

    async fn game(&self) -> Result<Option<Game>> {
        let game = self.session.get_game(&self.data.game_id).await.with_code()?;
        Ok(game.map(|game| Game::new(game, self.session.clone())))
    }

    async fn category(&self) -> Result<Option<Category>> {
        let category = self.session.get_category(&self.data.category_id).await.with_code()?;
        Ok(category.map(|category| Category::new(category, self.session.clone())))
    }

    /// Null for full-game runs.
    async fn level(&self) -> Result<Option<Level>> {
        if self.data.level_id.is_empty() {
            return Ok(None);
        }

        let level = self.session.get_level(&self.data.level_id).await.with_code()?;
        Ok(level.map(|level| Level::new(level, self.session.clone())))
    }

    async fn videos(&self) -> Option<RunVideos> {
        self.data.videos.clone().map(RunVideos)
    }

    async fn comment(&self) -> Option<&str> {
        non_empty(&self.data.comment)
    }

    async fn status(&self) -> RunStatus {
        RunStatus {
            data: self.data.status.clone(),
            session: self.session.clone(),
        }
    }

    async fn date(&self) -> Option<&str> {
        non_empty(&self.data.date)
    }

    async fn submitted(&self) -> Option<&str> {
        non_empty(&self.data.submitted)
    }

    async fn players(&self) -> Vec<RunPlayer> {
        self.data
            .players
            .iter()
            .map(|player| match player.rel {
                wire::RunPlayerRel::User => RunPlayer::User(UserRunPlayer {
                    user_id: player.id.clone(),
                    session: self.session.clone(),
                }),
                wire::RunPlayerRel::Guest => RunPlayer::Guest(GuestRunPlayer {
                    name: player.name.clone(),
                }),
            })
            .collect()
    }

    async fn splits(&self) -> Option<Link> {
        self.data.splits.as_ref().map(Link::from)
    }

    /// The run's time in seconds under the given timing method, the primary
    /// time when none is given. Null when the run was not timed that way.
    async fn time(&self, timing: Option<GameRunTime>) -> Option<f64> {
        let times = &self.data.times;

        let seconds = match timing.map(wire::GameRunTime::from) {
            None => times.primary,
            Some(wire::GameRunTime::Realtime) => times.realtime,
            Some(wire::GameRunTime::RealtimeNoloads) => times.realtime_noloads,
            Some(wire::GameRunTime::Ingame) => times.ingame,
        };

        (seconds > 0.0).then_some(seconds)
    }

    /// The value chosen for every variable of the run.
    async fn values(&self) -> Result<Vec<VariableValue>> {
        let lookups = self
            .data
            .values
            .iter()
            .map(|(variable_id, value_id)| self.variable_value(variable_id, value_id));

        let values = try_join_all(lookups).await.with_code()?;
        Ok(values.into_iter().flatten().collect())
    }

    async fn value(&self, variable: ID) -> Result<Option<VariableValue>> {
        let variable_id = raw_id(&variable);

        let Some(value_id) = self.data.values.get(&variable_id) else {
            return Ok(None);
        };

        self.variable_value(&variable_id, value_id).await.with_code()
    }
}

/// Reads one page of runs, optionally through a relationship.
pub(crate) async fn list_runs(
    session: &Session,
    scope: Option<Scope>,
    filter: Option<RunFilter>,
    order: Option<RunOrder>,
    first: Option<i32>,
    after: Option<String>,
) -> Result<Connection<OffsetCursor, Run>> {
    let filter = filter.as_ref().map(filters::RunFilter::from);

    let options = match (&scope, &filter) {
        (Some(scope), filter) => filters::scoped(scope, filter.as_ref()).with_code()?,
        (None, Some(filter)) => FetchOptions::new().filters(filter),
        (None, None) => FetchOptions::new(),
    };

    let options = RunOrder::apply(order, options);
    let options = paged(options, first, after.as_deref()).with_code()?;
    let (runs, page) = session.list_runs(&options).await.with_code()?;

    Ok(connection(runs, page.as_ref(), &options, |run| Run::new(run, session.clone())))
}

pub struct RunVideos(wire::RunVideos);

#[Object]
impl RunVideos {
    async fn text(&self) -> Option<&str> {
        non_empty(&self.0.text)
    }

    async fn links(&self) -> Vec<Link> {
        self.0.links.iter().map(Link::from).collect()
    }
}

pub struct RunStatus {
    data: wire::RunStatus,
    session: Session,
}

#[Object]
impl RunStatus {
    async fn status(&self) -> RunStatusValue {
        self.data.status.into()
    }

    async fn examiner(&self) -> Result<Option<User>> {
        let user = self.session.get_user(&self.data.examiner_id).await.with_code()?;
        Ok(user.map(|user| User::new(user, self.session.clone())))
    }

    async fn verify_date(&self) -> Option<DateTime<Utc>> {
        self.data.verify_date
    }

    async fn reason(&self) -> Option<&str> {
        non_empty(&self.data.reason)
    }
}

/// A registered user or a guest.
#[derive(Union)]
pub enum RunPlayer {
    User(UserRunPlayer),
    Guest(GuestRunPlayer),
}

pub struct UserRunPlayer {
    user_id: String,
    session: Session,
}

#[Object]
impl UserRunPlayer {
    async fn user(&self) -> Result<Option<User>> {
        let user = self.session.get_user(&self.user_id).await.with_code()?;
        Ok(user.map(|user| User::new(user, self.session.clone())))
    }
}

pub struct GuestRunPlayer {
    name: String,
}

#[Object]
impl GuestRunPlayer {
    async fn name(&self) -> &str {
        &self.name
    }
}
