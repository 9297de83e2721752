//! Platforms, regions, genres and engines. Games reference these by id
//! lists, so each has a plural accessor that resolves a whole list in one
//! loader round.

use crate::{
    envelope::PageInfo,
    error::Result,
    options::FetchOptions,
    session::Session,
    types::{Engine, Genre, Platform, Region},
};

impl Session {
    pub async fn list_platforms(&self, options: &FetchOptions) -> Result<(Vec<Platform>, Option<PageInfo>)> {
        let response = self.fetch("/platforms", options).await?;
        Ok((response.data, response.pagination))
    }

    pub async fn get_platform(&self, id: &str) -> Result<Option<Platform>> {
        self.load_entity("platforms", id).await
    }

    pub async fn get_platforms(&self, ids: &[String]) -> Result<Vec<Platform>> {
        self.load_entities("platforms", ids).await
    }

    pub async fn get_region(&self, id: &str) -> Result<Option<Region>> {
        self.load_entity("regions", id).await
    }

    pub async fn get_regions(&self, ids: &[String]) -> Result<Vec<Region>> {
        self.load_entities("regions", ids).await
    }

    pub async fn list_genres(&self, options: &FetchOptions) -> Result<(Vec<Genre>, Option<PageInfo>)> {
        let response = self.fetch("/genres", options).await?;
        Ok((response.data, response.pagination))
    }

    pub async fn get_genre(&self, id: &str) -> Result<Option<Genre>> {
        self.load_entity("genres", id).await
    }

    pub async fn get_genres(&self, ids: &[String]) -> Result<Vec<Genre>> {
        self.load_entities("genres", ids).await
    }

    pub async fn get_engine(&self, id: &str) -> Result<Option<Engine>> {
        self.load_entity("engines", id).await
    }

    pub async fn get_engines(&self, ids: &[String]) -> Result<Vec<Engine>> {
        self.load_entities("engines", ids).await
    }
}
