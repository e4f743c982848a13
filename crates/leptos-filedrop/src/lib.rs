//! Leptos FileDrop Utilities
//!
//! Small helpers for file drop zones: a highlight signal while files hover
//! the zone, handler factories for the native drag events, and extraction of
//! `File`s from drops and `<input type="file">` changes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// True while a drag is hovering the zone
    pub drag_active_read: ReadSignal<bool>,
    pub drag_active_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (drag_active_read, drag_active_write) = signal(false);
    FileDropSignals {
        drag_active_read,
        drag_active_write,
    }
}

/// Collect every entry of a `FileList` in order
pub fn file_list_to_vec(files: &FileList) -> Vec<File> {
    let mut out = Vec::with_capacity(files.length() as usize);
    for i in 0..files.length() {
        if let Some(f) = files.get(i) {
            out.push(f);
        }
    }
    out
}

/// Files carried by a drop event (empty when the drag held no files)
pub fn files_from_drop(ev: &DragEvent) -> Vec<File> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .map(|files| file_list_to_vec(&files))
        .unwrap_or_default()
}

/// Files selected in a file input's change event.
///
/// The input is cleared afterwards so picking the same file again still
/// fires `change`.
pub fn files_from_input(ev: &Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = input
        .files()
        .map(|files| file_list_to_vec(&files))
        .unwrap_or_default();
    input.set_value("");
    files
}

fn stop(ev: &DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Create dragenter/dragover handler: keeps the browser from opening the
/// file and turns the highlight on
pub fn make_on_dragover(fd: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        stop(&ev);
        if !fd.drag_active_read.get_untracked() {
            fd.drag_active_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(fd: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        stop(&ev);
        fd.drag_active_write.set(false);
    }
}

/// Create drop handler that hands the dropped files to `on_files`
pub fn make_on_drop<F>(fd: FileDropSignals, on_files: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(Vec<File>) + Clone + 'static,
{
    move |ev: DragEvent| {
        stop(&ev);
        fd.drag_active_write.set(false);
        let files = files_from_drop(&ev);
        if !files.is_empty() {
            on_files(files);
        }
    }
}
