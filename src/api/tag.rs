//! Tag Endpoints
//!
//! `/api/tags` CRUD.

use reqwest::Method;

use super::HttpApi;
use crate::error::ApiError;
use crate::models::{NewTag, Tag, TagPatch};

impl HttpApi {
    pub(super) async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let label = "GET /api/tags";
        let response = self.send(label, self.request(Method::GET, "/api/tags")).await?;
        Self::decode(label, response).await
    }

    pub(super) async fn post_tag(&self, tag: &NewTag) -> Result<Tag, ApiError> {
        let label = "POST /api/tags";
        let builder = self.request(Method::POST, "/api/tags").json(tag);
        let response = self.send(label, builder).await?;
        Self::decode(label, response).await
    }

    pub(super) async fn put_tag(&self, id: u32, patch: &TagPatch) -> Result<Tag, ApiError> {
        let path = format!("/api/tags/{}", id);
        let label = format!("PUT {}", path);
        let builder = self.request(Method::PUT, &path).json(patch);
        let response = self.send(&label, builder).await?;
        Self::decode(&label, response).await
    }

    pub(super) async fn remove_tag(&self, id: u32) -> Result<(), ApiError> {
        let path = format!("/api/tags/{}", id);
        let label = format!("DELETE {}", path);
        self.send(&label, self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
