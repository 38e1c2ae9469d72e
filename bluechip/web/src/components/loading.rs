use dioxus::prelude::*;

/// A loading spinner component with customizable message
#[component]
pub fn LoadingSpinner(message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div { class: "text-center py-12", role: "status",
            div { class: "inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-pink" }
            p { class: "mt-4 text-gray-400", "{message}" }
        }
    }
}

/// Grey placeholder shaped like a card while its row loads.
#[component]
pub fn SkeletonCard(#[props(default = "w-[120px] sm:w-[156px]".to_string())] width: String) -> Element {
    rsx! {
        div { class: "{width} flex-shrink-0 animate-pulse",
            div { class: "aspect-[3/4] rounded-lg bg-navy-light" }
            div { class: "mt-2 h-3 w-3/4 rounded bg-navy-light" }
            div { class: "mt-1 h-3 w-1/2 rounded bg-navy-light" }
        }
    }
}

#[component]
pub fn SkeletonRow(count: usize) -> Element {
    rsx! {
        div { class: "flex gap-3 overflow-hidden", aria_hidden: "true",
            for index in 0..count {
                SkeletonCard { key: "{index}" }
            }
        }
    }
}
