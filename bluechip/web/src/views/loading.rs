use crate::components::{Container, LoadingSpinner, SkeletonCard};
use dioxus::prelude::*;

const SKELETON_TILES: usize = 10;

/// Placeholder page shown while routed content is suspended.
#[component]
pub fn Loading() -> Element {
    rsx! {
        Container { class: "py-8",
            LoadingSpinner { message: "Loading content..." }
            div { class: "grid grid-cols-2 gap-4 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5",
                for index in 0..SKELETON_TILES {
                    SkeletonCard { key: "{index}", width: "w-full" }
                }
            }
        }
    }
}
