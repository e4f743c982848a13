use leptos::prelude::*;

/// Round color dot shown next to tag names
#[component]
pub fn TagSwatch(
    #[prop(into)] color: String,
    /// Tailwind size classes, e.g. "w-2 h-2"
    #[prop(default = "w-2 h-2")] size: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!("{} rounded-full shadow-inner", size)
            style=format!("background-color: {};", color)
        ></span>
    }
}
