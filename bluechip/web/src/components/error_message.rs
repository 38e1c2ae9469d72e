use dioxus::prelude::*;

/// Inline error shown in place of a section that failed to load.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "rounded-lg border border-red-500/40 bg-red-500/10 p-6 text-center",
            p { class: "text-red-400", "{message}" }
        }
    }
}
