//! Gallery Controller
//!
//! Owns the item and tag collections for the gallery screen, derives the
//! filtered card grid from them, and runs the reload and delete workflows.

use crate::api::CatalogApi;
use crate::error::ApiError;
use crate::filter::{filter_items, TagSelection};
use crate::generation::{LoadGeneration, LoadTicket};
use crate::models::{Item, Tag};
use crate::notify::Notifier;
use crate::state::StateCell;

/// Cover shown for items without photos
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;charset=UTF-8,%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20width%3D%22400%22%20height%3D%22300%22%20viewBox%3D%220%200%20400%20300%22%20preserveAspectRatio%3D%22none%22%3E%3Crect%20width%3D%22400%22%20height%3D%22300%22%20fill%3D%22%23f3f4f6%22%2F%3E%3Ctext%20x%3D%22200%22%20y%3D%22160%22%20text-anchor%3D%22middle%22%20fill%3D%22%239ca3af%22%20font-family%3D%22sans-serif%22%20font-size%3D%2220pt%22%3ENo%20photo%3C%2Ftext%3E%3C%2Fsvg%3E";

pub const NO_DESCRIPTION: &str = "No description";

const DELETE_ITEM_PROMPT: &str = "Delete this item? This cannot be undone.";

/// A tag swatch with its name
#[derive(Debug, Clone, PartialEq)]
pub struct PillView {
    pub name: String,
    pub color: String,
    pub active: bool,
}

impl PillView {
    pub fn for_tag(tag: &Tag, active: bool) -> Self {
        Self {
            name: tag.join_key().to_string(),
            color: tag.display_color().to_string(),
            active,
        }
    }
}

/// Everything a gallery card shows
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u32,
    pub name: String,
    pub cover: String,
    /// `"+N more"` when the item has more than one photo
    pub more_badge: Option<String>,
    pub description: String,
    pub tags: Vec<PillView>,
}

impl CardView {
    pub fn from_item(item: &Item) -> Self {
        let cover = item
            .cover_photo()
            .map(|p| p.file_path.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        let extra = item.extra_photo_count();

        Self {
            id: item.id,
            name: item.name.clone(),
            cover,
            more_badge: (extra > 0).then(|| format!("+{} more", extra)),
            description: item.description_text().unwrap_or(NO_DESCRIPTION).to_string(),
            tags: item.tags.iter().map(|t| PillView::for_tag(t, false)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    /// Nothing matches; show the empty-state placeholder instead of the grid
    Empty,
    Grid(Vec<CardView>),
}

/// Gallery screen state
#[derive(Debug, Default)]
pub struct GalleryState {
    pub items: Vec<Item>,
    pub tags: Vec<Tag>,
    pub active_filters: TagSelection,
    items_generation: LoadGeneration,
    tags_generation: LoadGeneration,
}

impl GalleryState {
    /// Flip a filter. Returns whether it is now active.
    pub fn toggle_filter(&mut self, name: &str) -> bool {
        self.active_filters.toggle(name)
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        filter_items(&self.items, &self.active_filters)
    }

    pub fn view(&self) -> GalleryView {
        let cards: Vec<CardView> = self
            .visible_items()
            .into_iter()
            .map(CardView::from_item)
            .collect();
        if cards.is_empty() {
            GalleryView::Empty
        } else {
            GalleryView::Grid(cards)
        }
    }

    /// One pill per known tag, marked when its filter is active
    pub fn filter_pills(&self) -> Vec<PillView> {
        self.tags
            .iter()
            .map(|t| PillView::for_tag(t, self.active_filters.contains(t.join_key())))
            .collect()
    }

    pub fn begin_items_load(&mut self) -> LoadTicket {
        self.items_generation.next()
    }

    pub fn begin_tags_load(&mut self) -> LoadTicket {
        self.tags_generation.next()
    }

    /// Replace the items unless a newer load has started since `ticket`
    pub fn apply_items(&mut self, ticket: LoadTicket, items: Vec<Item>) -> bool {
        if !self.items_generation.is_current(ticket) {
            log::debug!(target: "gallery", "Dropping stale item load");
            return false;
        }
        self.items = items;
        true
    }

    pub fn apply_tags(&mut self, ticket: LoadTicket, tags: Vec<Tag>) -> bool {
        if !self.tags_generation.is_current(ticket) {
            log::debug!(target: "gallery", "Dropping stale tag load");
            return false;
        }
        self.tags = tags;
        true
    }
}

fn report<N: Notifier>(notifier: &N, message: &str, err: &ApiError) {
    log::error!(target: "gallery", "{}: {}", message, err);
    notifier.alert(message);
}

/// Fetch tags then items and replace both collections
pub async fn reload<A, N, S>(api: &A, notifier: &N, state: &S)
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<GalleryState>,
{
    let Some(ticket) = state.modify(GalleryState::begin_tags_load) else {
        return;
    };
    match api.list_tags().await {
        Ok(tags) => {
            state.modify(|s| s.apply_tags(ticket, tags));
        }
        Err(err) => report(notifier, "Could not load tags.", &err),
    }

    reload_items(api, notifier, state).await;
}

/// Fetch items only and replace the collection
pub async fn reload_items<A, N, S>(api: &A, notifier: &N, state: &S)
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<GalleryState>,
{
    let Some(ticket) = state.modify(GalleryState::begin_items_load) else {
        return;
    };
    match api.list_items().await {
        Ok(items) => {
            log::info!(target: "gallery", "Loaded {} items", items.len());
            state.modify(|s| s.apply_items(ticket, items));
        }
        Err(err) => report(notifier, "Could not load items.", &err),
    }
}

/// Delete an item after confirmation. Returns true when it was deleted.
pub async fn delete_item<A, N, S>(api: &A, notifier: &N, state: &S, id: u32) -> bool
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<GalleryState>,
{
    if !notifier.confirm(DELETE_ITEM_PROMPT) {
        return false;
    }

    match api.delete_item(id).await {
        Ok(()) => {
            log::info!(target: "gallery", "Deleted item {}", id);
            reload_items(api, notifier, state).await;
            true
        }
        Err(err) => {
            report(notifier, "Something went wrong while deleting the item.", &err);
            false
        }
    }
}
