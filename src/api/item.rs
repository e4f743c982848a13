//! Item Endpoints
//!
//! `/api/items` and photo uploads.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use wasm_bindgen_futures::JsFuture;

use super::HttpApi;
use crate::error::ApiError;
use crate::models::{Item, NewItem};

/// Multipart field the upload endpoint reads
const PHOTO_FIELD: &str = "files";

impl HttpApi {
    pub(super) async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        let label = "GET /api/items";
        let response = self.send(label, self.request(Method::GET, "/api/items")).await?;
        Self::decode(label, response).await
    }

    pub(super) async fn post_item(&self, item: &NewItem) -> Result<Item, ApiError> {
        let label = "POST /api/items";
        let builder = self.request(Method::POST, "/api/items").json(item);
        let response = self.send(label, builder).await?;
        Self::decode(label, response).await
    }

    pub(super) async fn remove_item(&self, id: u32) -> Result<(), ApiError> {
        let path = format!("/api/items/{}", id);
        let label = format!("DELETE {}", path);
        self.send(&label, self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    pub(super) async fn post_photos(&self, item_id: u32, files: &[web_sys::File]) -> Result<(), ApiError> {
        let path = format!("/api/items/{}/photos", item_id);
        let label = format!("POST {}", path);

        let mut form = Form::new();
        for file in files {
            form = form.part(PHOTO_FIELD, file_part(file).await?);
        }

        self.send(&label, self.request(Method::POST, &path).multipart(form)).await?;
        Ok(())
    }
}

/// Read a browser file into a multipart part carrying its name and type
async fn file_part(file: &web_sys::File) -> Result<Part, ApiError> {
    let name = file.name();
    let read_error = |message: String| ApiError::FileRead {
        name: name.clone(),
        message,
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| read_error(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let part = Part::bytes(bytes).file_name(name.clone());
    let mime = file.type_();
    if mime.is_empty() {
        return Ok(part);
    }
    part.mime_str(&mime).map_err(|e| read_error(e.to_string()))
}
