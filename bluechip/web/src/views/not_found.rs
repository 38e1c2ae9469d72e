use crate::components::{Button, ButtonAction, ButtonVariant, Container, ContainerSize};
use bluechip_core::routes;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    use_hook(|| debug!(path = %route.join("/"), "no page for path"));

    rsx! {
        Container { size: ContainerSize::Sm, class: "py-20 text-center",
            div { class: "text-7xl font-extrabold text-pink mb-4", "404" }
            h1 { class: "text-3xl font-bold text-white mb-3", "Page Not Found" }
            p { class: "text-gray-400 mb-8",
                "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."
            }
            div { class: "flex justify-center gap-3",
                Button {
                    action: ButtonAction::Navigate(routes::HOME.to_string()),
                    variant: ButtonVariant::Primary,
                    "Go Home"
                }
                Button {
                    action: ButtonAction::Navigate(routes::GAMES.to_string()),
                    variant: ButtonVariant::Outline,
                    "Browse Games"
                }
            }
            p { class: "mt-8 text-sm text-gray-400",
                "Need help? "
                Link { class: "text-pink hover:underline", to: routes::CONTACT, "contact support" }
            }
        }
    }
}
