use dioxus::prelude::*;

/// Component displayed when a section has nothing to show
#[component]
pub fn EmptyState(
    title: String,
    message: Option<String>,
    #[props(default = "🎮".to_string())] icon: String,
) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-6xl mb-4", "{icon}" }
            h2 { class: "text-xl font-semibold text-white mb-2", "{title}" }
            if let Some(message) = message {
                p { class: "text-gray-400", "{message}" }
            }
        }
    }
}
