use super::icons::{social_glyph, Chevron, ChevronIcon};
use super::{Button, ButtonAction, ButtonVariant, Container};
use bluechip_core::config::SITE_CONFIG;
use bluechip_core::data::{app_downloads, footer_sections, social_links, FooterSection};
use bluechip_core::routes;
use bluechip_core::sections::section_dom_id;
use bluechip_core::ExpandedSections;
use dioxus::prelude::*;

/// Site footer. Link columns are laid out side by side on wide screens and
/// become independent accordions on narrow ones.
#[component]
pub fn Footer() -> Element {
    let expanded = use_signal(ExpandedSections::new);

    rsx! {
        footer { class: "mt-12 border-t border-white/10 bg-navy-dark text-gray-300",
            Container { class: "py-10",
                div { class: "grid gap-8 md:grid-cols-4",
                    HelpCenter {}
                    for section in footer_sections() {
                        FooterColumn { key: "{section.title}", section: *section, expanded }
                    }
                }
                div { class: "mt-10 flex flex-col gap-6 border-t border-white/10 pt-6 md:flex-row md:items-center md:justify-between",
                    div { class: "flex flex-wrap gap-3",
                        for download in app_downloads() {
                            Link {
                                key: "{download.href}",
                                class: "flex flex-col rounded-md bg-navy-light px-4 py-2 hover:bg-navy-light/80",
                                to: download.href,
                                span { class: "text-sm font-semibold text-white", "{download.title}" }
                                span { class: "text-xs text-gray-400", "{download.subtitle}" }
                            }
                        }
                    }
                    div { class: "flex gap-3",
                        for link in social_links() {
                            a {
                                key: "{link.href}",
                                class: "flex h-9 w-9 items-center justify-center rounded-full bg-navy-light hover:bg-pink",
                                href: link.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: link.label,
                                {social_glyph(link.network)}
                            }
                        }
                    }
                }
                p { class: "mt-6 text-center text-xs text-gray-500",
                    "© {SITE_CONFIG.name}. All rights reserved."
                }
            }
        }
    }
}

#[component]
fn HelpCenter() -> Element {
    rsx! {
        div { class: "space-y-3",
            p { class: "text-lg font-semibold text-white", "If you have any questions?" }
            Button {
                action: ButtonAction::Navigate(routes::HELP_CENTER.to_string()),
                variant: ButtonVariant::Primary,
                "GET ANSWERS"
            }
        }
    }
}

#[component]
fn FooterColumn(section: FooterSection, mut expanded: Signal<ExpandedSections>) -> Element {
    let title = section.title;
    let list_id = section_dom_id(title);
    let open = expanded.read().is_expanded(title);
    let (list_class, chevron_class) = if open {
        ("mt-3 space-y-2", "rotate-180 transition-transform")
    } else {
        ("mt-3 hidden space-y-2 md:block", "transition-transform")
    };

    rsx! {
        div {
            h3 { class: "hidden text-sm font-bold uppercase text-white md:block", "{title}" }
            button {
                r#type: "button",
                class: "flex w-full items-center justify-between text-sm font-bold uppercase text-white md:hidden",
                aria_expanded: open,
                aria_controls: "{list_id}",
                onclick: move |_| {
                    expanded.write().toggle(title);
                },
                "{title}"
                span { class: chevron_class,
                    ChevronIcon { direction: Chevron::Down }
                }
            }
            ul { id: "{list_id}", class: list_class,
                for link in section.links {
                    li { key: "{link.href}",
                        Link { class: "text-sm hover:text-white", to: link.href, "{link.label}" }
                    }
                }
            }
        }
    }
}
