use async_graphql::{Object, Result, ID};
use speedrun::{types as wire, Session};

use super::{non_empty, Category, Game, Level};
use crate::{
    enums::VariableScopeType,
    error::WithCode,
    id::{raw_id, NodeKind},
};

#[derive(Clone, Debug)]
pub struct Variable {
    data: wire::Variable,
    session: Session,
}

impl Variable {
    pub fn new(data: wire::Variable, session: Session) -> Self {
        Variable { data, session }
    }

    pub(crate) fn value_of(&self, value_id: &str) -> Option<VariableValue> {
        let data = self.data.values.values.get(value_id)?;

        Some(VariableValue {
            id: value_id.to_string(),
            data: data.clone(),
            variable: self.clone(),
        })
    }
}

#[Object]
impl Variable {
    async fn id(&self) -> ID {
        NodeKind::Variable.global_id(&self.data.id)
    }

    async fn raw_id(&self) -> &str {
        &self.data.id
    }

    async fn name(&self) -> &str {
        &self.data.name
    }

    async fn game(&self) -> Result<Option<Game>> {
        let Some(uri) = self.data.game_link() else {
            return Ok(None);
        };

        let game = self.session.get_game(uri).await.with_code()?;
        Ok(game.map(|game| Game::new(game, self.session.clone())))
    }

    /// Null for variables that apply to every category.
    async fn category(&self) -> Result<Option<Category>> {
        let category = self.session.get_category(&self.data.category_id).await.with_code()?;
        Ok(category.map(|category| Category::new(category, self.session.clone())))
    }

    async fn scope(&self) -> VariableScope {
        VariableScope {
            data: self.data.scope.clone(),
            session: self.session.clone(),
        }
    }

    async fn mandatory(&self) -> bool {
        self.data.mandatory
    }

    async fn user_defined(&self) -> bool {
        self.data.user_defined
    }

    async fn obsoletes(&self) -> bool {
        self.data.obsoletes
    }

    async fn is_subcategory(&self) -> bool {
        self.data.is_subcategory
    }

    /// Sorted by value id.
    async fn values(&self) -> Vec<VariableValue> {
        self.data
            .values
            .iter()
            .filter_map(|(id, _)| self.value_of(id))
            .collect()
    }

    async fn default_value(&self) -> Option<VariableValue> {
        self.value_of(&self.data.values.default)
    }

    async fn value(&self, id: ID) -> Option<VariableValue> {
        self.value_of(&raw_id(&id))
    }
}

pub struct VariableScope {
    data: wire::VariableScope,
    session: Session,
}

#[Object]
impl VariableScope {
    #[graphql(name = "type")]
    async fn kind(&self) -> VariableScopeType {
        self.data.kind.into()
    }

    /// Set for single-level variables only.
    async fn level(&self) -> Result<Option<Level>> {
        let level = self.session.get_level(&self.data.level_id).await.with_code()?;
        Ok(level.map(|level| Level::new(level, self.session.clone())))
    }
}

/// One choice of a variable.
pub struct VariableValue {
    id: String,
    data: wire::VariableValue,
    variable: Variable,
}

#[Object]
impl VariableValue {
    /// The value's upstream id, unique within its variable.
    async fn id(&self) -> &str {
        &self.id
    }

    async fn label(&self) -> &str {
        &self.data.label
    }

    async fn rules(&self) -> Option<&str> {
        non_empty(&self.data.rules)
    }

    async fn miscellaneous(&self) -> bool {
        self.data.flags.is_some_and(|flags| flags.miscellaneous)
    }

    async fn variable(&self) -> &Variable {
        &self.variable
    }
}
