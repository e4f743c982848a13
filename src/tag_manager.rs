//! Tag Manager Controller
//!
//! State and workflows for the tag management screen: list, create,
//! recolor and delete.

use crate::api::CatalogApi;
use crate::error::{ApiError, ValidationError};
use crate::generation::LoadGeneration;
use crate::models::{NewTag, Tag, TagPatch, DEFAULT_TAG_COLOR};
use crate::notify::Notifier;
use crate::state::StateCell;

#[derive(Debug, Clone, PartialEq)]
pub struct TagRowView {
    pub id: u32,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TagListView {
    /// First fetch not finished
    Loading,
    Empty,
    List(Vec<TagRowView>),
}

#[derive(Debug)]
pub struct TagManagerState {
    pub tags: Vec<Tag>,
    pub loaded: bool,
    /// Name input of the create form
    pub new_name: String,
    /// Color picker of the create form; kept across creates
    pub new_color: String,
    /// Create request in flight
    pub creating: bool,
    generation: LoadGeneration,
}

impl Default for TagManagerState {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            loaded: false,
            new_name: String::new(),
            new_color: DEFAULT_TAG_COLOR.to_string(),
            creating: false,
            generation: LoadGeneration::default(),
        }
    }
}

impl TagManagerState {
    pub fn count(&self) -> usize {
        self.tags.len()
    }

    pub fn view(&self) -> TagListView {
        if !self.loaded {
            return TagListView::Loading;
        }
        if self.tags.is_empty() {
            return TagListView::Empty;
        }
        TagListView::List(
            self.tags
                .iter()
                .map(|t| TagRowView {
                    id: t.id,
                    name: t.name.clone(),
                    color: t.display_color().to_string(),
                })
                .collect(),
        )
    }

    /// Validated create payload from the form inputs
    pub fn new_tag(&self) -> Result<NewTag, ValidationError> {
        let name = self.new_name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyTagName);
        }
        Ok(NewTag {
            name: name.to_string(),
            color: self.new_color.clone(),
        })
    }

    /// Show a color locally before the server confirms it
    pub fn set_local_color(&mut self, id: u32, color: &str) {
        if let Some(tag) = self.tags.iter_mut().find(|t| t.id == id) {
            tag.color = Some(color.to_string());
        }
    }
}

fn report<N: Notifier>(notifier: &N, message: &str, err: &ApiError) {
    log::error!(target: "tags", "{}: {}", message, err);
    notifier.alert(message);
}

fn delete_prompt(name: &str) -> String {
    format!("Delete the tag \"{}\"? This cannot be undone.", name)
}

/// Fetch the tag list and replace the local copy
pub async fn reload<A, N, S>(api: &A, notifier: &N, state: &S)
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<TagManagerState>,
{
    let Some(ticket) = state.modify(|s| s.generation.next()) else {
        return;
    };

    match api.list_tags().await {
        Ok(tags) => {
            state.modify(|s| {
                if s.generation.is_current(ticket) {
                    s.tags = tags;
                    s.loaded = true;
                }
            });
        }
        Err(err) => report(notifier, "Could not load the tag list.", &err),
    }
}

/// Create a tag from the form. Blank names are ignored without a request.
pub async fn create<A, N, S>(api: &A, notifier: &N, state: &S) -> bool
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<TagManagerState>,
{
    let Some(Ok(new_tag)) = state.modify(|s| {
        if s.creating {
            return Err(ValidationError::AlreadySubmitting);
        }
        let tag = s.new_tag()?;
        s.creating = true;
        Ok(tag)
    }) else {
        return false;
    };

    let created = match api.create_tag(&new_tag).await {
        Ok(tag) => {
            log::info!(target: "tags", "Created tag {} ({})", tag.name, tag.id);
            state.modify(|s| s.new_name.clear());
            reload(api, notifier, state).await;
            true
        }
        Err(err) => {
            report(notifier, "Something went wrong while creating the tag.", &err);
            false
        }
    };

    state.modify(|s| s.creating = false);
    created
}

/// Save a new color picked in the list. On failure the list is re-fetched so
/// the swatch shows the server's value again.
pub async fn update_color<A, N, S>(api: &A, notifier: &N, state: &S, id: u32, color: String) -> bool
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<TagManagerState>,
{
    state.modify(|s| s.set_local_color(id, &color));

    match api.update_tag(id, &TagPatch::color(color)).await {
        Ok(_) => true,
        Err(err) => {
            report(notifier, "Something went wrong while updating the tag color.", &err);
            reload(api, notifier, state).await;
            false
        }
    }
}

/// Delete a tag after a confirmation naming it
pub async fn delete<A, N, S>(api: &A, notifier: &N, state: &S, id: u32, name: &str) -> bool
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<TagManagerState>,
{
    if !notifier.confirm(&delete_prompt(name)) {
        return false;
    }

    match api.delete_tag(id).await {
        Ok(()) => {
            log::info!(target: "tags", "Deleted tag {} ({})", name, id);
            reload(api, notifier, state).await;
            true
        }
        Err(err) => {
            report(notifier, "Something went wrong while deleting the tag.", &err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::executor::block_on;

    use crate::api::tests::FakeApi;
    use crate::notify::tests::RecordingNotifier;

    fn colored(id: u32, name: &str, color: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            color: Some(color.to_string()),
        }
    }

    fn loaded(tags: Vec<Tag>) -> RefCell<TagManagerState> {
        RefCell::new(TagManagerState {
            tags,
            loaded: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_view_states() {
        let mut state = TagManagerState::default();
        assert_eq!(state.view(), TagListView::Loading);
        state.loaded = true;
        assert_eq!(state.view(), TagListView::Empty);
        state.tags.push(Tag { id: 1, name: "Books".into(), color: None });
        assert_eq!(state.count(), 1);
        match state.view() {
            TagListView::List(rows) => assert_eq!(rows[0].color, DEFAULT_TAG_COLOR),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_reload_populates_list() {
        let api = FakeApi::with(Vec::new(), vec![colored(1, "Books", "#111111")]);
        let notifier = RecordingNotifier::accepting();
        let state = RefCell::new(TagManagerState::default());

        block_on(reload(&api, &notifier, &state));

        assert!(state.borrow().loaded);
        assert_eq!(state.borrow().count(), 1);
    }

    #[test]
    fn test_reload_failure_alerts() {
        let api = FakeApi::default();
        api.fail("list_tags");
        let notifier = RecordingNotifier::accepting();
        let state = RefCell::new(TagManagerState::default());

        block_on(reload(&api, &notifier, &state));

        assert_eq!(notifier.alerts(), vec!["Could not load the tag list."]);
        assert_eq!(state.borrow().view(), TagListView::Loading);
    }

    #[test]
    fn test_create_trims_name_and_keeps_color() {
        let api = FakeApi::with(Vec::new(), Vec::new());
        let notifier = RecordingNotifier::accepting();
        let state = loaded(Vec::new());
        {
            let mut s = state.borrow_mut();
            s.new_name = "  Garden  ".to_string();
            s.new_color = "#22cc88".to_string();
        }

        assert!(block_on(create(&api, &notifier, &state)));

        assert_eq!(api.calls(), vec!["create_tag Garden", "list_tags"]);
        let s = state.borrow();
        assert!(s.new_name.is_empty());
        assert_eq!(s.new_color, "#22cc88");
        assert!(!s.creating);
        assert_eq!(s.tags[0].name, "Garden");
        assert_eq!(s.tags[0].color.as_deref(), Some("#22cc88"));
    }

    #[test]
    fn test_blank_name_sends_nothing() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::accepting();
        let state = loaded(Vec::new());
        state.borrow_mut().new_name = "   ".to_string();

        assert!(!block_on(create(&api, &notifier, &state)));
        assert!(api.calls().is_empty());
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_create_failure_alerts_and_keeps_name() {
        let api = FakeApi::default();
        api.fail("create_tag");
        let notifier = RecordingNotifier::accepting();
        let state = loaded(Vec::new());
        state.borrow_mut().new_name = "Garden".to_string();

        assert!(!block_on(create(&api, &notifier, &state)));
        assert_eq!(state.borrow().new_name, "Garden");
        assert!(!state.borrow().creating);
        assert_eq!(notifier.alerts().len(), 1);
    }

    #[test]
    fn test_color_update_keeps_new_color() {
        let api = FakeApi::with(Vec::new(), vec![colored(1, "Books", "#111111")]);
        let notifier = RecordingNotifier::accepting();
        let state = loaded(vec![colored(1, "Books", "#111111")]);

        assert!(block_on(update_color(&api, &notifier, &state, 1, "#abcdef".to_string())));

        assert_eq!(api.calls(), vec!["update_tag 1"]);
        assert_eq!(state.borrow().tags[0].color.as_deref(), Some("#abcdef"));
    }

    #[test]
    fn test_failed_color_update_reverts_to_server() {
        let api = FakeApi::with(Vec::new(), vec![colored(1, "Books", "#111111")]);
        api.fail("update_tag");
        let notifier = RecordingNotifier::accepting();
        let state = loaded(vec![colored(1, "Books", "#111111")]);

        assert!(!block_on(update_color(&api, &notifier, &state, 1, "#abcdef".to_string())));

        assert_eq!(api.calls(), vec!["update_tag 1", "list_tags"]);
        assert_eq!(state.borrow().tags[0].color.as_deref(), Some("#111111"));
        assert_eq!(notifier.alerts().len(), 1);
    }

    #[test]
    fn test_delete_confirmation_names_tag() {
        let api = FakeApi::with(Vec::new(), vec![colored(4, "Toys", "#111111")]);
        let notifier = RecordingNotifier::declining();
        let state = loaded(vec![colored(4, "Toys", "#111111")]);

        assert!(!block_on(delete(&api, &notifier, &state, 4, "Toys")));

        assert!(api.calls().is_empty());
        assert_eq!(state.borrow().count(), 1);
        assert_eq!(
            notifier.confirms.borrow()[0],
            "Delete the tag \"Toys\"? This cannot be undone."
        );
    }

    #[test]
    fn test_confirmed_delete_reloads() {
        let api = FakeApi::with(Vec::new(), vec![colored(4, "Toys", "#111111")]);
        let notifier = RecordingNotifier::accepting();
        let state = loaded(vec![colored(4, "Toys", "#111111")]);

        assert!(block_on(delete(&api, &notifier, &state, 4, "Toys")));

        assert_eq!(api.calls(), vec!["delete_tag 4", "list_tags"]);
        assert_eq!(state.borrow().view(), TagListView::Empty);
    }
}
