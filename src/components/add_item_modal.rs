//! Add Item Modal Component
//!
//! Photo staging, tag picking and description for a new item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FileDropZone, TagSwatch};
use crate::context::use_app_context;
use crate::creation::{self, CreationDraft, SubmitOutcome};
use crate::gallery::{self, GalleryState, PillView};

const PILL_SELECTED: &str = "px-3 py-1.5 rounded-full text-xs font-medium border transition-colors flex items-center gap-1.5 bg-gray-100 border-gray-300 text-gray-900 ring-1 ring-gray-400";
const PILL_IDLE: &str = "px-3 py-1.5 rounded-full text-xs font-medium border transition-colors flex items-center gap-1.5 bg-white border-gray-200 text-gray-600 hover:bg-gray-50";

/// Keep the page behind the modal from scrolling
fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        log::warn!(target: "creation", "Could not toggle page scroll: {:?}", e);
    }
}

#[component]
pub fn AddItemModal(
    state: RwSignal<GalleryState, LocalStorage>,
    draft: RwSignal<CreationDraft<web_sys::File>, LocalStorage>,
) -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        lock_body_scroll(draft.with(|d| d.is_open()));
    });

    let close = move |_: web_sys::MouseEvent| draft.update(|d| d.close());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let notifier = ctx.notifier;
        let today = chrono::Local::now().date_naive();

        spawn_local(async move {
            let outcome = creation::submit(&api, &notifier, &draft, today).await;
            // The item exists server-side in both cases
            if matches!(
                outcome,
                Some(SubmitOutcome::Created { .. } | SubmitOutcome::UploadFailed { .. })
            ) {
                gallery::reload(&api, &notifier, &state).await;
            }
        });
    };

    // Picker pills come from the same tag list as the filter bar
    let tag_pills = move || {
        let tags = state.with(|s| s.tags.clone());
        if tags.is_empty() {
            return view! {
                <span class="text-sm text-gray-500 p-2">
                    "No tags available. Create some on the tag management page first."
                </span>
            }
            .into_any();
        }

        tags.iter()
            .map(|tag| {
                let pill = PillView::for_tag(tag, draft.with(|d| d.selected_tags.contains(tag.join_key())));
                let name = pill.name.clone();
                let class = if pill.active { PILL_SELECTED } else { PILL_IDLE };
                view! {
                    <button
                        type="button"
                        class=class
                        on:click=move |_| {
                            draft.update(|d| {
                                d.toggle_tag(&name);
                            });
                        }
                    >
                        <TagSwatch color=pill.color />
                        <span>{pill.name}</span>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    let submitting = move || draft.with(|d| d.is_submitting());

    view! {
        <Show when=move || draft.with(|d| d.is_open())>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-gray-900/50 p-4">
                <div class="bg-white rounded-2xl shadow-xl w-full max-w-lg max-h-[90vh] overflow-y-auto">
                    <div class="flex items-center justify-between px-6 py-4 border-b border-gray-100">
                        <h2 class="text-lg font-semibold text-gray-900">"Add item"</h2>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-600 disabled:opacity-40 disabled:cursor-not-allowed"
                            disabled=submitting
                            on:click=close
                        >
                            "×"
                        </button>
                    </div>

                    <form class="px-6 py-5 space-y-5" on:submit=on_submit>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Photos"</label>
                            <FileDropZone draft=draft />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Tags"</label>
                            <div class="flex flex-wrap gap-2">{tag_pills}</div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">
                                "Description"
                            </label>
                            <textarea
                                id="itemDescription"
                                rows="3"
                                class="w-full rounded-lg border border-gray-300 px-3 py-2 text-sm focus:border-indigo-500 focus:ring-indigo-500"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.set_description(event_target_value(&ev)));
                                }
                            ></textarea>
                        </div>

                        <div class="flex justify-end gap-3 pt-2">
                            <button
                                type="button"
                                class="px-4 py-2 rounded-lg border border-gray-300 text-sm text-gray-700 hover:bg-gray-50 disabled:opacity-40 disabled:cursor-not-allowed"
                                disabled=submitting
                                on:click=close
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class=move || {
                                    if submitting() {
                                        "px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-medium flex items-center gap-2 opacity-75 cursor-not-allowed"
                                    } else {
                                        "px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-medium flex items-center gap-2 hover:bg-indigo-700"
                                    }
                                }
                                disabled=submitting
                            >
                                <span>{move || if submitting() { "Saving..." } else { "Save item" }}</span>
                                <Show when=submitting>
                                    <span class="spinner h-4 w-4 rounded-full border-2 border-white border-t-transparent animate-spin"></span>
                                </Show>
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
