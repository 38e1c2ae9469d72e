use super::{
    EmptyState, ErrorMessage, ProviderCard, ScrollButtons, ScrollTrack, SectionHeading,
    SkeletonRow, ViewAllLink,
};
use crate::hooks::use_scroll_row;
use bluechip_core::config::HOME_SETTINGS;
use bluechip_core::{routes, visible_items, Provider};
use dioxus::prelude::*;

#[component]
pub fn ProviderGrid(
    providers: Vec<Provider>,
    #[props(default = "Providers".to_string())] title: String,
    #[props(default)] loading: bool,
    error: Option<String>,
    max_items: Option<usize>,
    #[props(default = true)] show_view_all: bool,
    #[props(default = routes::PROVIDERS.to_string())] view_all_href: String,
) -> Element {
    let visible = visible_items(&providers, max_items).to_vec();
    let row = use_scroll_row(visible.clone());

    let body = if loading {
        rsx! { SkeletonRow { count: HOME_SETTINGS.skeleton_items } }
    } else if let Some(error) = error {
        rsx! { ErrorMessage { message: format!("Error loading providers: {error}") } }
    } else if visible.is_empty() {
        rsx! { EmptyState { title: "No Providers Found", message: "No providers found", icon: "🏢" } }
    } else {
        rsx! {
            ScrollTrack { row, class: "gap-4",
                for provider in visible {
                    ProviderCard { key: "{provider.id}", provider }
                }
            }
        }
    };

    rsx! {
        section { class: "py-4",
            SectionHeading { title,
                if show_view_all {
                    ViewAllLink { href: view_all_href }
                }
                ScrollButtons { row }
            }
            {body}
        }
    }
}
