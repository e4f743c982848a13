//! Item Card Component
//!
//! Cover photo, photo count badge, description, tags and delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{TagSwatch, TrashIcon};
use crate::context::use_app_context;
use crate::gallery::{self, CardView, GalleryState};

#[component]
pub fn ItemCard(card: CardView, state: RwSignal<GalleryState, LocalStorage>) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    let on_delete = move |_: web_sys::MouseEvent| {
        let api = ctx.api();
        let notifier = ctx.notifier;
        spawn_local(async move {
            gallery::delete_item(&api, &notifier, &state, id).await;
        });
    };

    view! {
        <div class="item-card bg-white rounded-xl overflow-hidden border border-gray-100 shadow-sm flex flex-col h-full">
            <div class="relative w-full h-48 overflow-hidden bg-gray-100">
                <img src=card.cover alt=card.name class="w-full h-full object-cover" />
                {card.more_badge.map(|badge| view! {
                    <div class="absolute bottom-2 right-2 bg-black/60 backdrop-blur-sm text-white text-xs px-2 py-1 rounded-md">
                        {badge}
                    </div>
                })}
            </div>
            <div class="p-5 flex-1 flex flex-col">
                <p class="text-sm text-gray-500 mb-4 flex-1 line-clamp-2">{card.description}</p>
                <div class="flex flex-wrap gap-1 mt-auto pt-4 border-t border-gray-100 items-center justify-between">
                    <div class="flex flex-wrap gap-1 w-[80%]">
                        {card.tags.into_iter().map(|pill| view! {
                            <span class="inline-flex items-center gap-1.5 px-2.5 py-1 rounded-full text-xs font-medium bg-gray-50 border border-gray-200 text-gray-700 shadow-sm">
                                <TagSwatch color=pill.color />
                                {pill.name}
                            </span>
                        }).collect_view()}
                    </div>
                    <button
                        type="button"
                        class="text-gray-400 hover:text-red-600 transition-colors p-1.5 rounded-md hover:bg-red-50 focus:outline-none"
                        title="Delete item"
                        on:click=on_delete
                    >
                        <TrashIcon />
                    </button>
                </div>
            </div>
        </div>
    }
}
