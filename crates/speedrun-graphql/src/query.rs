use async_graphql::{connection::Connection, Context, Object, Result, ID};
use futures_util::future::join_all;
use speedrun::{FetchOptions, Session};

use crate::{
    connection::OffsetCursor,
    error::WithCode,
    id::raw_id,
    inputs::{GameFilter, GameOrder, GenreOrder, LeaderboardVariable, PlatformOrder, RunFilter, RunOrder, UserFilter, UserOrder},
    node::{self, Node},
    objects::{list_games, list_genres, list_platforms, list_runs, list_users, Game, Genre, Leaderboard, Platform, Run, User},
};

pub struct Query;

#[Object]
impl Query {
    async fn viewer(&self, ctx: &Context<'_>) -> Result<Viewer> {
        Ok(Viewer {
            session: ctx.data::<Session>()?.clone(),
        })
    }

    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        node::resolve(ctx.data::<Session>()?, &id).await
    }

    /// Resolves every id concurrently, in argument order.
    async fn nodes(&self, ctx: &Context<'_>, ids: Vec<ID>) -> Result<Vec<Option<Node>>> {
        let session = ctx.data::<Session>()?;
        let nodes = join_all(ids.iter().map(|id| node::resolve(session, id))).await;

        nodes.into_iter().collect()
    }
}

/// Entry point for the top-level lists.
pub struct Viewer {
    session: Session,
}

#[Object]
impl Viewer {
    async fn games(
        &self,
        filter: Option<GameFilter>,
        order: Option<GameOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Game>> {
        list_games(&self.session, None, filter, order, first, after).await
    }

    async fn runs(
        &self,
        filter: Option<RunFilter>,
        order: Option<RunOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Run>> {
        list_runs(&self.session, None, filter, order, first, after).await
    }

    async fn users(
        &self,
        filter: Option<UserFilter>,
        order: Option<UserOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, User>> {
        list_users(&self.session, filter, order, first, after).await
    }

    async fn platforms(
        &self,
        order: Option<PlatformOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Platform>> {
        list_platforms(&self.session, order, first, after).await
    }

    async fn genres(
        &self,
        order: Option<GenreOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Genre>> {
        list_genres(&self.session, order, first, after).await
    }

    /// A full-game leaderboard, or a level leaderboard when `level` is set.
    /// `variables` narrows it to subcategory values.
    async fn leaderboard(
        &self,
        game: ID,
        category: ID,
        level: Option<ID>,
        variables: Option<Vec<LeaderboardVariable>>,
    ) -> Result<Option<Leaderboard>> {
        let options = variables
            .unwrap_or_default()
            .iter()
            .fold(FetchOptions::new(), |options, variable| {
                options.variable(&raw_id(&variable.id), raw_id(&variable.value))
            });

        let level = level.as_ref().map(raw_id);

        let leaderboard = self
            .session
            .get_leaderboard(&raw_id(&game), &raw_id(&category), level.as_deref(), &options)
            .await
            .with_code()?;

        Ok(leaderboard.map(|leaderboard| Leaderboard::new(leaderboard, self.session.clone())))
    }
}
