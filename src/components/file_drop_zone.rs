//! File Drop Zone Component
//!
//! Click-to-browse and drag-and-drop area staging photos for a new item,
//! plus the list of staged files.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_filedrop::{create_file_drop_signals, files_from_input, make_on_dragleave, make_on_dragover, make_on_drop};

use crate::creation::CreationDraft;

#[component]
pub fn FileDropZone(draft: RwSignal<CreationDraft<web_sys::File>, LocalStorage>) -> impl IntoView {
    let fd = create_file_drop_signals();
    let input_ref = NodeRef::<Input>::new();

    let stage = move |files: Vec<web_sys::File>| {
        let offered = files.len();
        if let Some(accepted) = draft.try_update(|d| d.stage_files(files)) {
            log::debug!(target: "staging", "Staged {} of {} file(s)", accepted, offered);
        }
    };

    let on_browse = move |_: web_sys::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div>
            <div
                class=move || {
                    if fd.drag_active_read.get() {
                        "drop-zone drag-active border-2 border-dashed border-indigo-400 bg-indigo-50 rounded-lg p-6 text-center cursor-pointer"
                    } else {
                        "drop-zone border-2 border-dashed border-gray-300 rounded-lg p-6 text-center cursor-pointer hover:border-indigo-300"
                    }
                }
                on:click=on_browse
                on:dragenter=make_on_dragover(fd)
                on:dragover=make_on_dragover(fd)
                on:dragleave=make_on_dragleave(fd)
                on:drop=make_on_drop(fd, stage)
            >
                <p class="text-sm text-gray-600">"Drop photos here or click to browse"</p>
                <p class="text-xs text-gray-400 mt-1">"Images only"</p>
            </div>
            // Outside the zone so its click does not bubble back into on_browse
            <input
                type="file"
                accept="image/*"
                multiple
                class="hidden"
                node_ref=input_ref
                on:change=move |ev| stage(files_from_input(&ev))
            />

            <div class="flex flex-wrap gap-2 mt-3">
                {move || {
                    draft
                        .with(|d| d.files.views())
                        .into_iter()
                        .map(|file| {
                            let index = file.index;
                            view! {
                                <div class="inline-flex items-center bg-gray-100 text-gray-700 text-xs px-3 py-1.5 rounded-full border border-gray-200">
                                    <span class="mr-2 font-medium" title=file.full_name>{file.label}</span>
                                    <button
                                        type="button"
                                        class="text-gray-400 hover:text-red-500 focus:outline-none"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            draft.update(|d| {
                                                d.remove_file(index);
                                            });
                                        }
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
