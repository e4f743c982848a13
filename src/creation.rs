//! Item Creation Workflow
//!
//! The "add item" modal: tag picking, file staging, and the two-step save
//! (create the item, then upload its photos).

use chrono::NaiveDate;

use crate::api::CatalogApi;
use crate::error::{ApiError, ValidationError};
use crate::filter::TagSelection;
use crate::generation::{LoadGeneration, LoadTicket};
use crate::models::NewItem;
use crate::notify::Notifier;
use crate::staging::{FileStaging, StagedFile};
use crate::state::StateCell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Open and editable
    Idle,
    /// Open with a save in flight; the submit control is disabled
    Submitting,
}

/// Name given to new items; the form has no name field
pub fn default_item_name(today: NaiveDate) -> String {
    format!("Untitled item ({})", today.format("%Y/%m/%d"))
}

/// A validated save, detached from the draft so it can cross awaits
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub item: NewItem,
    pub files: Vec<F>,
    /// Hand back to [`CreationDraft::finish_submit`]
    pub ticket: LoadTicket,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Item created and every photo uploaded
    Created { item_id: u32 },
    /// Nothing was persisted
    CreateFailed(ApiError),
    /// The item exists server-side but has no photos
    UploadFailed { item_id: u32, error: ApiError },
}

/// Modal state for creating one item
#[derive(Debug, Clone)]
pub struct CreationDraft<F> {
    modal: ModalState,
    pub selected_tags: TagSelection,
    pub files: FileStaging<F>,
    pub description: String,
    /// Closing the modal makes an in-flight save's ticket stale
    submissions: LoadGeneration,
}

impl<F> Default for CreationDraft<F> {
    fn default() -> Self {
        Self {
            modal: ModalState::Closed,
            selected_tags: TagSelection::default(),
            files: FileStaging::default(),
            description: String::new(),
            submissions: LoadGeneration::default(),
        }
    }
}

impl<F: StagedFile + Clone> CreationDraft<F> {
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal != ModalState::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.modal == ModalState::Submitting
    }

    pub fn open(&mut self) {
        self.selected_tags.clear();
        self.modal = ModalState::Idle;
    }

    /// Close from any state and drop everything staged. A save still in
    /// flight keeps running but can no longer change the draft.
    pub fn close(&mut self) {
        self.submissions.invalidate();
        self.modal = ModalState::Closed;
        self.selected_tags.clear();
        self.files.clear();
        self.description.clear();
    }

    pub fn toggle_tag(&mut self, name: &str) -> bool {
        self.selected_tags.toggle(name)
    }

    pub fn stage_files(&mut self, incoming: impl IntoIterator<Item = F>) -> usize {
        self.files.stage(incoming)
    }

    pub fn remove_file(&mut self, index: usize) -> Option<F> {
        self.files.remove(index)
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Validate and enter `Submitting`. On error the draft is untouched.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<Submission<F>, ValidationError> {
        if self.is_submitting() {
            return Err(ValidationError::AlreadySubmitting);
        }
        if self.files.is_empty() {
            return Err(ValidationError::NoPhotos);
        }

        self.modal = ModalState::Submitting;
        Ok(Submission {
            item: NewItem {
                name: default_item_name(today),
                description: self.description.clone(),
                tags: self.selected_tags.to_vec(),
            },
            files: self.files.files().to_vec(),
            ticket: self.submissions.next(),
        })
    }

    /// Leave `Submitting` according to how the save went.
    ///
    /// Ignored (returns false) when the modal was closed since `ticket` was
    /// issued, so a finished save never reopens or wipes a later draft.
    pub fn finish_submit(&mut self, ticket: LoadTicket, outcome: &SubmitOutcome) -> bool {
        if !self.is_submitting() || !self.submissions.is_current(ticket) {
            return false;
        }
        match outcome {
            SubmitOutcome::Created { .. } | SubmitOutcome::UploadFailed { .. } => self.close(),
            SubmitOutcome::CreateFailed(_) => self.modal = ModalState::Idle,
        }
        true
    }
}

/// Create the item, then upload its photos against the returned id
pub async fn send_submission<A: CatalogApi>(api: &A, submission: Submission<A::File>) -> SubmitOutcome {
    let created = match api.create_item(&submission.item).await {
        Ok(item) => item,
        Err(err) => return SubmitOutcome::CreateFailed(err),
    };

    match api.upload_photos(created.id, &submission.files).await {
        Ok(()) => SubmitOutcome::Created { item_id: created.id },
        Err(error) => SubmitOutcome::UploadFailed {
            item_id: created.id,
            error,
        },
    }
}

/// Run a full save from the draft in `draft`.
///
/// Returns `None` when validation blocked the save, otherwise the outcome.
/// The caller reloads the gallery for `Created` and `UploadFailed`.
pub async fn submit<A, N, S>(api: &A, notifier: &N, draft: &S, today: NaiveDate) -> Option<SubmitOutcome>
where
    A: CatalogApi,
    N: Notifier,
    S: StateCell<CreationDraft<A::File>>,
{
    let submission = match draft.modify(|d| d.begin_submit(today))? {
        Ok(submission) => submission,
        Err(err) => {
            if err == ValidationError::NoPhotos {
                notifier.alert(&err.to_string());
            }
            return None;
        }
    };

    log::info!(
        target: "creation",
        "Saving \"{}\" with {} photo(s) and {} tag(s)",
        submission.item.name,
        submission.files.len(),
        submission.item.tags.len()
    );
    let ticket = submission.ticket;
    let outcome = send_submission(api, submission).await;

    match &outcome {
        SubmitOutcome::Created { item_id } => {
            log::info!(target: "creation", "Created item {}", item_id);
        }
        SubmitOutcome::CreateFailed(err) => {
            log::error!(target: "creation", "Item creation failed: {}", err);
            notifier.alert("Something went wrong while saving the item. See the console for details.");
        }
        SubmitOutcome::UploadFailed { item_id, error } => {
            log::error!(target: "creation", "Item {} saved but photo upload failed: {}", item_id, error);
            notifier.alert("The item was saved, but its photos could not be uploaded.");
        }
    }

    if draft.modify(|d| d.finish_submit(ticket, &outcome)) == Some(false) {
        log::debug!(target: "creation", "Modal closed during save; draft left as is");
    }
    Some(outcome)
}
