use crate::{
    envelope::PageInfo,
    error::Result,
    options::FetchOptions,
    session::Session,
    types::Game,
};

impl Session {
    pub async fn list_games(&self, options: &FetchOptions) -> Result<(Vec<Game>, Option<PageInfo>)> {
        let response = self.fetch("/games", options).await?;
        Ok((response.data, response.pagination))
    }

    pub async fn get_game(&self, id: &str) -> Result<Option<Game>> {
        self.load_entity("games", id).await
    }
}
