use crate::{error::Result, options::FetchOptions, session::{path_segment, Session}, types::Variable};

impl Session {
    pub async fn list_game_variables(&self, game_id: &str) -> Result<Vec<Variable>> {
        self.list_variables(&format!("/games/{}/variables", path_segment(game_id)?)).await
    }

    pub async fn list_category_variables(&self, category_id: &str) -> Result<Vec<Variable>> {
        self.list_variables(&format!("/categories/{}/variables", path_segment(category_id)?)).await
    }

    pub async fn list_level_variables(&self, level_id: &str) -> Result<Vec<Variable>> {
        self.list_variables(&format!("/levels/{}/variables", path_segment(level_id)?)).await
    }

    pub async fn get_variable(&self, id: &str) -> Result<Option<Variable>> {
        self.load_entity("variables", id).await
    }

    async fn list_variables(&self, path: &str) -> Result<Vec<Variable>> {
        let response = self.fetch(path, &FetchOptions::new()).await?;
        Ok(response.data)
    }
}
