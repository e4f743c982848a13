//! Catalog API Client
//!
//! REST bindings for items, tags and photo uploads, organized by domain.

mod item;
mod tag;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Item, NewItem, NewTag, Tag, TagPatch};
use crate::staging::StagedFile;

/// Operations the screens need from the catalog backend
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// File type accepted by [`CatalogApi::upload_photos`]
    type File: StagedFile + Clone;

    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;
    async fn create_item(&self, item: &NewItem) -> Result<Item, ApiError>;
    async fn delete_item(&self, id: u32) -> Result<(), ApiError>;
    /// Success or failure only; the response body is not read
    async fn upload_photos(&self, item_id: u32, files: &[Self::File]) -> Result<(), ApiError>;

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError>;
    async fn create_tag(&self, tag: &NewTag) -> Result<Tag, ApiError>;
    async fn update_tag(&self, id: u32, patch: &TagPatch) -> Result<Tag, ApiError>;
    async fn delete_tag(&self, id: u32) -> Result<(), ApiError>;
}

/// HTTP implementation backed by `reqwest` (browser fetch on wasm32)
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send and reject non-2xx statuses
    async fn send(&self, label: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        log::debug!(target: "api", "{}", label);
        let response = builder.send().await.map_err(|e| ApiError::Transport {
            request: label.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                request: label.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(label: &str, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            request: label.to_string(),
            message: e.to_string(),
        })
    }
}

impl CatalogApi for HttpApi {
    type File = web_sys::File;

    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.fetch_items().await
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item, ApiError> {
        self.post_item(item).await
    }

    async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
        self.remove_item(id).await
    }

    async fn upload_photos(&self, item_id: u32, files: &[web_sys::File]) -> Result<(), ApiError> {
        self.post_photos(item_id, files).await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.fetch_tags().await
    }

    async fn create_tag(&self, tag: &NewTag) -> Result<Tag, ApiError> {
        self.post_tag(tag).await
    }

    async fn update_tag(&self, id: u32, patch: &TagPatch) -> Result<Tag, ApiError> {
        self.put_tag(id, patch).await
    }

    async fn delete_tag(&self, id: u32) -> Result<(), ApiError> {
        self.remove_tag(id).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::staging::tests::FakeFile;

    #[test]
    fn test_url_join_strips_trailing_slash() {
        let api = HttpApi::new("http://localhost:8000/");
        assert_eq!(api.url("/api/items"), "http://localhost:8000/api/items");
    }

    /// In-memory catalog that records every call
    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub items: RefCell<Vec<Item>>,
        pub tags: RefCell<Vec<Tag>>,
        pub calls: RefCell<Vec<String>>,
        pub uploads: RefCell<Vec<(u32, Vec<String>)>>,
        pub created: RefCell<Vec<NewItem>>,
        /// Call labels (e.g. `"upload_photos"`) that should fail
        pub failing: RefCell<Vec<&'static str>>,
        /// Runs inside `list_items` before it answers
        before_list_items: RefCell<Option<Box<dyn Fn()>>>,
        next_id: RefCell<u32>,
    }

    impl FakeApi {
        pub(crate) fn with(items: Vec<Item>, tags: Vec<Tag>) -> Self {
            let api = Self::default();
            *api.items.borrow_mut() = items;
            *api.tags.borrow_mut() = tags;
            *api.next_id.borrow_mut() = 100;
            api
        }

        pub(crate) fn fail(&self, call: &'static str) {
            self.failing.borrow_mut().push(call);
        }

        pub(crate) fn on_list_items(&self, hook: impl Fn() + 'static) {
            *self.before_list_items.borrow_mut() = Some(Box::new(hook));
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: &'static str, detail: String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("{} {}", call, detail).trim_end().to_string());
            if self.failing.borrow().contains(&call) {
                return Err(ApiError::Status {
                    request: call.to_string(),
                    status: 500,
                });
            }
            Ok(())
        }

        fn next_id(&self) -> u32 {
            let mut id = self.next_id.borrow_mut();
            *id += 1;
            *id
        }
    }

    impl CatalogApi for FakeApi {
        type File = FakeFile;

        async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
            self.record("list_items", String::new())?;
            if let Some(hook) = self.before_list_items.borrow().as_ref() {
                hook();
            }
            Ok(self.items.borrow().clone())
        }

        async fn create_item(&self, item: &NewItem) -> Result<Item, ApiError> {
            self.record("create_item", item.name.clone())?;
            self.created.borrow_mut().push(item.clone());
            let created = Item {
                id: self.next_id(),
                name: item.name.clone(),
                description: Some(item.description.clone()),
                photos: Vec::new(),
                tags: Vec::new(),
            };
            self.items.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
            self.record("delete_item", id.to_string())?;
            self.items.borrow_mut().retain(|i| i.id != id);
            Ok(())
        }

        async fn upload_photos(&self, item_id: u32, files: &[FakeFile]) -> Result<(), ApiError> {
            self.record("upload_photos", item_id.to_string())?;
            self.uploads
                .borrow_mut()
                .push((item_id, files.iter().map(|f| f.name.clone()).collect()));
            Ok(())
        }

        async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
            self.record("list_tags", String::new())?;
            Ok(self.tags.borrow().clone())
        }

        async fn create_tag(&self, tag: &NewTag) -> Result<Tag, ApiError> {
            self.record("create_tag", tag.name.clone())?;
            let created = Tag {
                id: self.next_id(),
                name: tag.name.clone(),
                color: Some(tag.color.clone()),
            };
            self.tags.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update_tag(&self, id: u32, patch: &TagPatch) -> Result<Tag, ApiError> {
            self.record("update_tag", id.to_string())?;
            let mut tags = self.tags.borrow_mut();
            let tag = tags.iter_mut().find(|t| t.id == id).ok_or(ApiError::Status {
                request: format!("PUT /api/tags/{}", id),
                status: 404,
            })?;
            if let Some(color) = &patch.color {
                tag.color = Some(color.clone());
            }
            Ok(tag.clone())
        }

        async fn delete_tag(&self, id: u32) -> Result<(), ApiError> {
            self.record("delete_tag", id.to_string())?;
            self.tags.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }
}
