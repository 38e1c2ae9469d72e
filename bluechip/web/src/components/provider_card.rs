use super::{Card, CardBody, CardDescription, CardHeader, CardTitle, CardVariant};
use bluechip_core::{routes, Provider};
use dioxus::prelude::*;

/// Provider logo tile. Renders nothing without a provider.
#[component]
pub fn ProviderCard(provider: Option<Provider>) -> Element {
    let Some(provider) = provider else {
        return rsx! {};
    };
    let href = routes::provider_details(&provider.id);
    let games_label = provider.games_label();

    rsx! {
        Link { class: "block w-[140px] flex-shrink-0 sm:w-[180px]", to: href,
            Card { variant: CardVariant::Outline, hoverable: true,
                CardHeader { class: "flex h-20 items-center justify-center bg-navy-dark p-4",
                    if let Some(logo) = &provider.logo {
                        img {
                            class: "max-h-full max-w-full object-contain",
                            src: "{logo}",
                            alt: "{provider.name}",
                            loading: "lazy",
                        }
                    } else {
                        span { class: "text-lg font-bold text-white", "{provider.name}" }
                    }
                }
                CardBody { class: "p-2 text-center",
                    CardTitle { "{provider.name}" }
                    if let Some(label) = games_label {
                        CardDescription { "{label}" }
                    }
                }
            }
        }
    }
}
