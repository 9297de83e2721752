use async_graphql::{connection::Connection, Object, Result, SimpleObject, ID};
use speedrun::{filters::Scope, types as wire, Session};

use super::{list_runs, non_empty, Game, Run, Variable};
use crate::{
    connection::OffsetCursor,
    enums::{CategoryPlayersType, CategoryType},
    error::WithCode,
    id::NodeKind,
    inputs::{RunFilter, RunOrder},
};

#[derive(Clone, Debug)]
pub struct Category {
    data: wire::Category,
    session: Session,
}

impl Category {
    pub fn new(data: wire::Category, session: Session) -> Self {
        Category { data, session }
    }
}

#[Object]
impl Category {
    async fn id(&self) -> ID {
        NodeKind::Category.global_id(&self.data.id)
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

    #[graphql(name = "type")]
    async fn kind(&self) -> CategoryType {
        self.data.kind.into()
    }

    async fn rules(&self) -> Option<&str> {
        non_empty(&self.data.rules)
    }

    async fn players(&self) -> CategoryPlayers {
        CategoryPlayers {
            kind: self.data.players.kind.into(),
            value: self.data.players.value,
        }
    }

    async fn miscellaneous(&self) -> bool {
        self.data.miscellaneous
    }

    /// Resolved through the category's `game` link.
    async fn game(&self) -> Result<Option<Game>> {
        let Some(uri) = self.data.game_link() else {
            return Ok(None);
        };

        let game = self.session.get_game(uri).await.with_code()?;
        Ok(game.map(|game| Game::new(game, self.session.clone())))
    }

    async fn variables(&self) -> Result<Vec<Variable>> {
        let variables = self.session.list_category_variables(&self.data.id).await.with_code()?;

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
        let scope = Scope::new("category", self.data.id.clone());
        list_runs(&self.session, Some(scope), filter, order, first, after).await
    }
}

#[derive(SimpleObject, Clone, Copy, Debug)]
pub struct CategoryPlayers {
    #[graphql(name = "type")]
    pub kind: CategoryPlayersType,
    pub value: i32,
}
