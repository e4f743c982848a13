//! Frontend Models
//!
//! Data structures matching the catalog API.

use serde::{Deserialize, Serialize};

/// Swatch color for tags created without one
pub const DEFAULT_TAG_COLOR: &str = "#4f46e5";

/// Photo attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u32,
    /// Path or URL usable as an image source
    pub file_path: String,
    #[serde(default)]
    pub item_id: Option<u32>,
}

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Tag {
    /// Key used to join tags with items, filters and creation payloads.
    ///
    /// Tags are matched by name, not by id. Keep every comparison going
    /// through here.
    pub fn join_key(&self) -> &str {
        &self.name
    }

    pub fn display_color(&self) -> &str {
        match self.color.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_TAG_COLOR,
        }
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Item {
    /// First photo in sequence order
    pub fn cover_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Photos beyond the cover
    pub fn extra_photo_count(&self) -> usize {
        self.photos.len().saturating_sub(1)
    }

    /// Description, treating the server's empty default as absent
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.iter().any(|t| t.join_key() == key)
    }
}

/// `POST /api/items` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    /// Tag join keys; unknown names are created server-side
    pub tags: Vec<String>,
}

/// `POST /api/tags` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}

/// `PUT /api/tags/{id}` partial body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TagPatch {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults_when_fields_missing() {
        let item: Item = serde_json::from_str(r#"{"id": 3, "name": "Lamp"}"#).unwrap();
        assert_eq!(item.id, 3);
        assert!(item.photos.is_empty());
        assert!(item.tags.is_empty());
        assert!(item.description_text().is_none());
        assert!(item.cover_photo().is_none());
        assert_eq!(item.extra_photo_count(), 0);
    }

    #[test]
    fn test_empty_description_is_absent() {
        let item: Item =
            serde_json::from_str(r#"{"id": 1, "name": "Mug", "description": ""}"#).unwrap();
        assert!(item.description_text().is_none());
    }

    #[test]
    fn test_full_item_payload() {
        let json = r##"{
            "id": 7,
            "name": "Camera",
            "description": "Film body",
            "tags": [{"id": 1, "name": "Vintage", "color": "#ff0000"}],
            "photos": [
                {"id": 10, "file_path": "/uploads/a.jpg", "item_id": 7},
                {"id": 11, "file_path": "/uploads/b.jpg", "item_id": 7}
            ]
        }"##;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.cover_photo().unwrap().file_path, "/uploads/a.jpg");
        assert_eq!(item.extra_photo_count(), 1);
        assert!(item.has_tag("Vintage"));
        assert!(!item.has_tag("vintage"));
        assert_eq!(item.description_text(), Some("Film body"));
    }

    #[test]
    fn test_tag_display_color() {
        let plain = Tag { id: 1, name: "A".into(), color: None };
        let blank = Tag { id: 2, name: "B".into(), color: Some(String::new()) };
        let red = Tag { id: 3, name: "C".into(), color: Some("#ff0000".into()) };
        assert_eq!(plain.display_color(), DEFAULT_TAG_COLOR);
        assert_eq!(blank.display_color(), DEFAULT_TAG_COLOR);
        assert_eq!(red.display_color(), "#ff0000");
    }

    #[test]
    fn test_tag_patch_skips_absent_fields() {
        let body = serde_json::to_value(TagPatch::color("#123456")).unwrap();
        assert_eq!(body, serde_json::json!({"color": "#123456"}));
        let empty = serde_json::to_value(TagPatch::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }
}
