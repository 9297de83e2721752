use async_graphql::{connection::Connection, Object, Result, ID};
use speedrun::{filters::Scope, types as wire, FetchOptions, Session};

use super::{list_runs, non_empty, Category, Game, Run, Variable};
use crate::{
    connection::OffsetCursor,
    error::WithCode,
    id::NodeKind,
    inputs::{RunFilter, RunOrder},
};

#[derive(Clone, Debug)]
pub struct Level {
    data: wire::Level,
    session: Session,
}

impl Level {
    pub fn new(data: wire::Level, session: Session) -> Self {
        Level { data, session }
    }
}

#[Object]
impl Level {
    async fn id(&self) -> ID {
        NodeKind::Level.global_id(&self.data.id)
    }

    async fn raw_id(&self) -> &str {
        &self.data.id
    }

    async fn name(&self) -> &str {
        &self.data.name
    }

    async fn weblink(&self) -> &str {
        &self.data.weblink
    }

    async fn rules(&self) -> Option<&str> {
        non_empty(&self.data.rules)
    }

    async fn game(&self) -> Result<Option<Game>> {
        let Some(uri) = self.data.game_link() else {
            return Ok(None);
        };

        let game = self.session.get_game(uri).await.with_code()?;
        Ok(game.map(|game| Game::new(game, self.session.clone())))
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        let categories = self
            .session
            .list_level_categories(&self.data.id, &FetchOptions::new())
            .await
            .with_code()?;

        Ok(categories
            .into_iter()
            .map(|category| Category::new(category, self.session.clone()))
            .collect())
    }

    async fn variables(&self) -> Result<Vec<Variable>> {
        let variables = self.session.list_level_variables(&self.data.id).await.with_code()?;

        Ok(variables
            .into_iter()
            .map(|variable| Variable::new(variable, self.session.clone()))
            .collect())
    }

    async fn runs(
        &self,
        filter: Option<RunFilter>,
        order: Option<RunOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Run>> {
        let scope = Scope::new("level", self.data.id.clone());
        list_runs(&self.session, Some(scope), filter, order, first, after).await
    }
}
