use super::icons::{Chevron, ChevronIcon};
use crate::hooks::ScrollRow;
use bluechip_core::cn;
use dioxus::prelude::*;

/// Left/right arrows for a [`ScrollRow`]. An arrow is disabled while the row
/// cannot move further that way.
#[component]
pub fn ScrollButtons(row: ScrollRow) -> Element {
    let arrow = "flex h-8 w-8 items-center justify-center rounded-md bg-navy-light text-white transition-opacity disabled:opacity-40";

    rsx! {
        button {
            r#type: "button",
            class: arrow,
            aria_label: "Scroll left",
            disabled: !row.can_scroll_left(),
            onclick: move |_| row.scroll_left(),
            ChevronIcon { direction: Chevron::Left }
        }
        button {
            r#type: "button",
            class: arrow,
            aria_label: "Scroll right",
            disabled: !row.can_scroll_right(),
            onclick: move |_| row.scroll_right(),
            ChevronIcon { direction: Chevron::Right }
        }
    }
}

/// The scrollable strip itself. Registers with `row` on mount and keeps it
/// refreshed while the user scrolls.
#[component]
pub fn ScrollTrack(mut row: ScrollRow, class: Option<String>, children: Element) -> Element {
    let class = cn([
        "flex overflow-x-auto scroll-smooth no-scrollbar",
        class.as_deref().unwrap_or("gap-3"),
    ]);

    rsx! {
        div {
            class,
            onmounted: move |evt| row.attach(evt),
            onscroll: move |_| row.refresh(),
            {children}
        }
    }
}
