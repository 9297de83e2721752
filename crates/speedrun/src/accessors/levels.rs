use crate::{error::Result, options::FetchOptions, session::{path_segment, Session}, types::Level};

impl Session {
    pub async fn list_game_levels(&self, game_id: &str, options: &FetchOptions) -> Result<Vec<Level>> {
        let response = self.fetch(&format!("/games/{}/levels", path_segment(game_id)?), options).await?;
        Ok(response.data)
    }

    pub async fn get_level(&self, id: &str) -> Result<Option<Level>> {
        self.load_entity("levels", id).await
    }
}
