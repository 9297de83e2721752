use crate::{
    envelope::PageInfo,
    error::Result,
    options::FetchOptions,
    session::Session,
    types::Run,
};

impl Session {
    pub async fn list_runs(&self, options: &FetchOptions) -> Result<(Vec<Run>, Option<PageInfo>)> {
        let response = self.fetch("/runs", options).await?;
        Ok((response.data, response.pagination))
    }

    pub async fn get_run(&self, id: &str) -> Result<Option<Run>> {
        self.load_entity("runs", id).await
    }
}
