use crate::components::{CategoryFilter, Container, GameGrid, PromoSlider, ProviderGrid};
use bluechip_core::config::HOME_SETTINGS;
use bluechip_core::{data, Game};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn Home() -> Element {
    let slides = use_hook(data::promo_slides);
    let games = use_hook(data::games);
    let providers = use_hook(data::providers);
    let new_games: Vec<Game> = games.iter().filter(|game| game.is_new).cloned().collect();

    rsx! {
        Container { class: "space-y-6 py-6",
            PromoSlider { slides }
            // Selecting a category does not filter the rows below yet.
            CategoryFilter {
                on_change: move |category: Option<String>| debug!(?category, "category selected"),
            }
            GameGrid {
                title: "Popular Games",
                games,
                max_items: HOME_SETTINGS.max_games,
            }
            GameGrid {
                title: "New Games",
                games: new_games,
                max_items: HOME_SETTINGS.max_games,
            }
            ProviderGrid {
                title: "Game Providers",
                providers,
                max_items: HOME_SETTINGS.max_providers,
            }
        }
    }
}
