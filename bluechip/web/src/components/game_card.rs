use super::{
    BadgeVariant, Card, CardBadge, CardBody, CardDescription, CardFooter, CardImage, CardTitle,
};
use bluechip_core::{routes, Game};
use dioxus::prelude::*;

/// Tile linking to a game's detail page. Renders nothing without a game.
#[component]
pub fn GameCard(game: Option<Game>) -> Element {
    let Some(game) = game else {
        return rsx! {};
    };
    let href = routes::game_details(&game.id);

    rsx! {
        Link { class: "block w-[120px] flex-shrink-0 sm:w-[156px]", to: href,
            Card { hoverable: true,
                div { class: "relative",
                    CardImage { src: game.image.clone(), alt: game.title.clone() }
                    div { class: "absolute left-2 top-2 flex gap-1",
                        if game.is_hot {
                            CardBadge { variant: BadgeVariant::Danger, "Hot" }
                        }
                        if game.is_new {
                            CardBadge { variant: BadgeVariant::Success, "New" }
                        }
                    }
                }
                CardBody { class: "p-2 pb-1",
                    CardTitle { "{game.title}" }
                }
                if let Some(provider) = &game.provider {
                    CardFooter { class: "px-2 pb-2",
                        CardDescription { "{provider}" }
                    }
                }
            }
        }
    }
}
