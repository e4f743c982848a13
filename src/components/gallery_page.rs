//! Gallery Page
//!
//! Filterable card grid with the "add item" modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AddItemModal, FilterBar, ItemCard};
use crate::context::use_app_context;
use crate::creation::CreationDraft;
use crate::gallery::{self, GalleryState, GalleryView};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_app_context();

    // One controller per screen
    let state = RwSignal::new_local(GalleryState::default());
    let draft = RwSignal::new_local(CreationDraft::<web_sys::File>::default());

    // Load tags and items on mount
    Effect::new(move |_| {
        let api = ctx.api();
        let notifier = ctx.notifier;
        spawn_local(async move {
            gallery::reload(&api, &notifier, &state).await;
        });
    });

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <header class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"My Collection"</h1>
                <div class="flex items-center gap-3">
                    <a href="/tags" class="text-sm font-medium text-gray-600 hover:text-indigo-600">
                        "Manage tags"
                    </a>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700"
                        on:click=move |_| draft.update(|d| d.open())
                    >
                        "Add item"
                    </button>
                </div>
            </header>

            <FilterBar state=state />

            {move || match state.with(|s| s.view()) {
                GalleryView::Empty => view! {
                    <div class="text-center py-16 text-gray-500">
                        <p class="text-lg font-medium">"No items to show"</p>
                        <p class="text-sm mt-1">"Add an item or clear some filters."</p>
                    </div>
                }
                .into_any(),
                GalleryView::Grid(cards) => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                        {cards
                            .into_iter()
                            .map(|card| view! { <ItemCard card=card state=state /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}

            <AddItemModal state=state draft=draft />
        </div>
    }
}
