use bluechip_core::data::SocialNetwork;
use bluechip_core::CategoryIcon;
use dioxus::prelude::*;

pub fn category_glyph(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::Diamond => "💎",
        CategoryIcon::Vip => "👑",
        CategoryIcon::Promotion => "🎁",
        CategoryIcon::HotMatch => "🔥",
        CategoryIcon::Transaction => "💱",
        CategoryIcon::Game => "🎮",
        CategoryIcon::Provider => "🏢",
    }
}

pub fn social_glyph(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::Telegram => "✈️",
        SocialNetwork::Facebook => "📘",
        SocialNetwork::Instagram => "📷",
        SocialNetwork::Twitter => "🐦",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Left,
    Right,
    Down,
}

#[component]
pub fn ChevronIcon(direction: Chevron, #[props(default = "h-4 w-4".to_string())] class: String) -> Element {
    let d = match direction {
        Chevron::Left => "M15 19l-7-7 7-7",
        Chevron::Right => "M9 5l7 7-7 7",
        Chevron::Down => "M19 9l-7 7-7-7",
    };

    rsx! {
        svg {
            class,
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { stroke_linecap: "round", stroke_linejoin: "round", d }
        }
    }
}

#[component]
pub fn MenuIcon(open: bool) -> Element {
    let d = if open {
        "M6 18L18 6M6 6l12 12"
    } else {
        "M4 6h16M4 12h16M4 18h16"
    };

    rsx! {
        svg {
            class: "h-6 w-6",
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { stroke_linecap: "round", stroke_linejoin: "round", d }
        }
    }
}

#[component]
pub fn InfoIcon(#[props(default = "h-5 w-5".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class,
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            circle { cx: "12", cy: "12", r: "9" }
            path { stroke_linecap: "round", d: "M12 11v5M12 8h.01" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluechip_core::data::default_categories;
    use std::collections::HashSet;

    #[test]
    fn every_default_category_has_its_own_glyph() {
        let glyphs: HashSet<_> = default_categories()
            .into_iter()
            .filter_map(|category| category.icon)
            .map(category_glyph)
            .collect();

        assert_eq!(glyphs.len(), default_categories().len());
    }

    #[test]
    fn can_hide_decorative_icons_from_screen_readers() {
        let chevron = dioxus::ssr::render_element(rsx! {
            ChevronIcon { direction: Chevron::Down }
        });
        let menu = dioxus::ssr::render_element(rsx! {
            MenuIcon { open: true }
        });
        let info = dioxus::ssr::render_element(rsx! {
            InfoIcon {}
        });

        for svg in [chevron, menu, info] {
            assert!(svg.contains(r#"aria-hidden="true""#), "{svg}");
        }
    }
}
