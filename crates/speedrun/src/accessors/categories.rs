use crate::{error::Result, options::FetchOptions, session::{path_segment, Session}, types::Category};

impl Session {
    pub async fn list_game_categories(&self, game_id: &str, options: &FetchOptions) -> Result<Vec<Category>> {
        let response = self.fetch(&format!("/games/{}/categories", path_segment(game_id)?), options).await?;
        Ok(response.data)
    }

    pub async fn list_level_categories(&self, level_id: &str, options: &FetchOptions) -> Result<Vec<Category>> {
        let response = self.fetch(&format!("/levels/{}/categories", path_segment(level_id)?), options).await?;
        Ok(response.data)
    }

    pub async fn get_category(&self, id: &str) -> Result<Option<Category>> {
        self.load_entity("categories", id).await
    }
}
