use crate::{error::Result, options::FetchOptions, session::{path_segment, Session}, types::Leaderboard};

impl Session {
    /// Reads a full-game leaderboard, or a level leaderboard when `level_id`
    /// is given. Subcategory filters are passed as `var-<variable id>`
    /// filters on `options`.
    pub async fn get_leaderboard(
        &self,
        game_id: &str,
        category_id: &str,
        level_id: Option<&str>,
        options: &FetchOptions,
    ) -> Result<Option<Leaderboard>> {
        let game = path_segment(game_id)?;
        let category = path_segment(category_id)?;

        let path = match level_id {
            Some(level_id) => format!("/leaderboards/{game}/level/{}/category/{category}", path_segment(level_id)?),
            None => format!("/leaderboards/{game}/category/{category}"),
        };

        let response = self.fetch_optional::<Option<Leaderboard>>(&path, options).await?;
        Ok(response.and_then(|response| response.data))
    }
}
