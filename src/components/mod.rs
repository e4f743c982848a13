//! UI Components
//!
//! Leptos views over the gallery and tag manager controllers.

mod add_item_modal;
mod file_drop_zone;
mod filter_bar;
mod gallery_page;
mod item_card;
mod tag_manager_page;
mod tag_swatch;
mod trash_icon;

pub use add_item_modal::AddItemModal;
pub use file_drop_zone::FileDropZone;
pub use filter_bar::FilterBar;
pub use gallery_page::GalleryPage;
pub use item_card::ItemCard;
pub use tag_manager_page::TagManagerPage;
pub use tag_swatch::TagSwatch;
pub use trash_icon::TrashIcon;
