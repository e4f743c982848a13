//! Tag Manager Page
//!
//! Create tags, recolor them in place, and delete them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TrashIcon;
use crate::context::use_app_context;
use crate::tag_manager::{self, TagListView, TagManagerState, TagRowView};

#[component]
fn TagRow(row: TagRowView, state: RwSignal<TagManagerState, LocalStorage>) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;
    let name = row.name.clone();

    let on_color = move |ev: web_sys::Event| {
        let color = event_target_value(&ev);
        let api = ctx.api();
        let notifier = ctx.notifier;
        spawn_local(async move {
            tag_manager::update_color(&api, &notifier, &state, id, color).await;
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let api = ctx.api();
        let notifier = ctx.notifier;
        let name = name.clone();
        spawn_local(async move {
            tag_manager::delete(&api, &notifier, &state, id, &name).await;
        });
    };

    view! {
        <li class="px-5 py-3.5 flex justify-between items-center hover:bg-gray-50 transition-colors group">
            <div class="flex items-center">
                <input
                    type="color"
                    class="w-6 h-6 rounded cursor-pointer border-0 p-0 bg-transparent mr-3"
                    title="Change tag color"
                    prop:value=row.color
                    on:change=on_color
                />
                <span class="text-sm font-medium text-gray-800">{row.name}</span>
            </div>
            <button
                type="button"
                class="text-gray-400 hover:text-red-600 p-1.5 rounded-md hover:bg-red-50 focus:outline-none opacity-0 group-hover:opacity-100 transition-opacity"
                title="Delete tag"
                on:click=on_delete
            >
                <TrashIcon />
            </button>
        </li>
    }
}

#[component]
pub fn TagManagerPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new_local(TagManagerState::default());

    // Load tags on mount
    Effect::new(move |_| {
        let api = ctx.api();
        let notifier = ctx.notifier;
        spawn_local(async move {
            tag_manager::reload(&api, &notifier, &state).await;
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let notifier = ctx.notifier;
        spawn_local(async move {
            tag_manager::create(&api, &notifier, &state).await;
        });
    };

    let creating = move || state.with(|s| s.creating);

    view! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            <header class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Tags"</h1>
                <a href="/" class="text-sm font-medium text-gray-600 hover:text-indigo-600">
                    "Back to gallery"
                </a>
            </header>

            <form class="flex items-center gap-3 mb-6" on:submit=on_create>
                <input
                    type="color"
                    class="w-10 h-10 rounded cursor-pointer border border-gray-300 p-1 bg-white"
                    title="Tag color"
                    prop:value=move || state.with(|s| s.new_color.clone())
                    on:input=move |ev| state.update(|s| s.new_color = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="New tag name"
                    class="flex-1 rounded-lg border border-gray-300 px-3 py-2 text-sm focus:border-indigo-500 focus:ring-indigo-500"
                    prop:value=move || state.with(|s| s.new_name.clone())
                    on:input=move |ev| state.update(|s| s.new_name = event_target_value(&ev))
                />
                <button
                    type="submit"
                    class=move || {
                        if creating() {
                            "px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-medium flex items-center gap-2 opacity-75 cursor-not-allowed"
                        } else {
                            "px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-medium flex items-center gap-2 hover:bg-indigo-700"
                        }
                    }
                    disabled=creating
                >
                    <span>"Add"</span>
                    <Show when=creating>
                        <span class="spinner h-4 w-4 rounded-full border-2 border-white border-t-transparent animate-spin"></span>
                    </Show>
                </button>
            </form>

            <p class="text-sm text-gray-500 mb-2">
                {move || state.with(|s| s.count())} " tag(s)"
            </p>

            {move || match state.with(|s| s.view()) {
                TagListView::Loading => view! {
                    <p class="text-sm text-gray-400">"Loading..."</p>
                }
                .into_any(),
                TagListView::Empty => view! {
                    <div class="text-center py-12 text-gray-500">
                        <p class="font-medium">"No tags yet"</p>
                        <p class="text-sm mt-1">"Create your first tag above."</p>
                    </div>
                }
                .into_any(),
                TagListView::List(rows) => view! {
                    <div class="bg-white rounded-xl border border-gray-100 shadow-sm overflow-hidden">
                        <ul class="divide-y divide-gray-100">
                            {rows
                                .into_iter()
                                .map(|row| view! { <TagRow row=row state=state /> })
                                .collect_view()}
                        </ul>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
