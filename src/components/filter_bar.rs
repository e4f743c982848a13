//! Filter Bar Component
//!
//! One toggle pill per tag; active pills narrow the gallery.

use leptos::prelude::*;

use crate::components::TagSwatch;
use crate::gallery::GalleryState;

const PILL_ACTIVE: &str = "px-3 py-1.5 rounded-full text-sm font-medium border transition-colors flex items-center gap-2 bg-indigo-50 border-indigo-200 text-indigo-800 ring-1 ring-indigo-500";
const PILL_IDLE: &str = "px-3 py-1.5 rounded-full text-sm font-medium border transition-colors flex items-center gap-2 bg-white border-gray-300 text-gray-700 hover:bg-gray-50";

#[component]
pub fn FilterBar(state: RwSignal<GalleryState, LocalStorage>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-6">
            {move || {
                let pills = state.with(|s| s.filter_pills());
                if pills.is_empty() {
                    return view! {
                        <span class="text-sm text-gray-500">
                            "No tags yet. Add an item or create tags to start filtering."
                        </span>
                    }
                    .into_any();
                }

                pills
                    .into_iter()
                    .map(|pill| {
                        let name = pill.name.clone();
                        let class = if pill.active { PILL_ACTIVE } else { PILL_IDLE };
                        view! {
                            <button
                                type="button"
                                class=class
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.toggle_filter(&name);
                                    });
                                }
                            >
                                <TagSwatch color=pill.color size="w-2.5 h-2.5" />
                                <span>{pill.name}</span>
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
