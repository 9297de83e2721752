use crate::{
    envelope::PageInfo,
    error::Result,
    options::FetchOptions,
    session::{path_segment, Session},
    types::{PlacedRun, User},
};

impl Session {
    pub async fn list_users(&self, options: &FetchOptions) -> Result<(Vec<User>, Option<PageInfo>)> {
        let response = self.fetch("/users", options).await?;
        Ok((response.data, response.pagination))
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.load_entity("users", id).await
    }

    /// The user's best placed run in every category they have run.
    pub async fn list_user_personal_bests(&self, user_id: &str, options: &FetchOptions) -> Result<Vec<PlacedRun>> {
        let response = self.fetch(&format!("/users/{}/personal-bests", path_segment(user_id)?), options).await?;
        Ok(response.data)
    }
}
