use super::icons::category_glyph;
use super::{ScrollButtons, ScrollTrack};
use crate::hooks::use_scroll_row;
use bluechip_core::data::default_categories;
use bluechip_core::{cn, CategoryItem, CategorySelection};
use dioxus::prelude::*;

/// Pill bar of categories with single, toggleable selection.
///
/// `active_category` overrides the internal selection whenever it is set to
/// a different id; clearing it leaves the internal selection alone.
#[component]
pub fn CategoryFilter(
    categories: Option<Vec<CategoryItem>>,
    active_category: Option<String>,
    on_change: Option<EventHandler<Option<String>>>,
) -> Element {
    let categories = categories.unwrap_or_else(default_categories);
    let mut selection = use_signal(|| CategorySelection::new(active_category.clone()));
    let row = use_scroll_row(categories.clone());

    use_effect(use_reactive!(|active_category| {
        let mut next = selection.peek().clone();
        if next.sync_external(active_category.as_deref()) {
            selection.set(next);
        }
    }));

    rsx! {
        div { class: "flex items-center gap-2 py-3",
            ScrollTrack { row, class: "flex-1 gap-2",
                for category in categories {
                    button {
                        key: "{category.id}",
                        r#type: "button",
                        class: cn([
                            "flex flex-shrink-0 items-center gap-2 rounded-full px-4 py-2 text-sm font-medium whitespace-nowrap transition-colors",
                            if selection.read().is_selected(&category.id) {
                                "bg-pink text-white"
                            } else {
                                "bg-navy-light text-gray-300 hover:bg-navy-light/80"
                            },
                        ]),
                        aria_pressed: selection.read().is_selected(&category.id),
                        onclick: {
                            let id = category.id.clone();
                            move |_| {
                                let selected = selection.write().select(&id);
                                if let Some(handler) = on_change {
                                    handler.call(selected);
                                }
                            }
                        },
                        if let Some(icon) = category.icon {
                            span { aria_hidden: "true", {category_glyph(icon)} }
                        }
                        "{category.name}"
                        if let Some(count) = category.count {
                            span { class: "text-xs opacity-70", "({count})" }
                        }
                    }
                }
            }
            div { class: "hidden gap-2 sm:flex",
                ScrollButtons { row }
            }
        }
    }
}
