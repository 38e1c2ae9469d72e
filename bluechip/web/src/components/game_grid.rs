use super::{
    EmptyState, ErrorMessage, GameCard, ScrollButtons, ScrollTrack, SectionHeading, SkeletonRow,
    ViewAllLink,
};
use crate::hooks::use_scroll_row;
use bluechip_core::config::HOME_SETTINGS;
use bluechip_core::{routes, visible_items, Game};
use dioxus::prelude::*;

/// Horizontally scrolling row of game tiles with loading, error and empty
/// states.
#[component]
pub fn GameGrid(
    games: Vec<Game>,
    #[props(default = "Games".to_string())] title: String,
    #[props(default)] loading: bool,
    error: Option<String>,
    max_items: Option<usize>,
    #[props(default = true)] show_view_all: bool,
    #[props(default = routes::GAMES.to_string())] view_all_href: String,
) -> Element {
    let visible = visible_items(&games, max_items).to_vec();
    let row = use_scroll_row(visible.clone());

    let body = if loading {
        rsx! { SkeletonRow { count: HOME_SETTINGS.skeleton_items } }
    } else if let Some(error) = error {
        rsx! { ErrorMessage { message: format!("Error loading games: {error}") } }
    } else if visible.is_empty() {
        rsx! { EmptyState { title: "No Games Found", message: "No games found" } }
    } else {
        rsx! {
            ScrollTrack { row,
                for game in visible {
                    GameCard { key: "{game.id}", game }
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
