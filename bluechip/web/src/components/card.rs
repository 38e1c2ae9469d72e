//! Card surface and its parts. Compose them as children of [`Card`].
use bluechip_core::cn;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Outline,
    Elevated,
}

impl CardVariant {
    fn classes(self) -> &'static str {
        match self {
            CardVariant::Default => "bg-navy-light",
            CardVariant::Outline => "border border-white/10 bg-transparent",
            CardVariant::Elevated => "bg-navy-light shadow-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    fn classes(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "bg-pink text-white",
            BadgeVariant::Secondary => "bg-navy-dark text-white",
            BadgeVariant::Success => "bg-green-500 text-white",
            BadgeVariant::Warning => "bg-yellow-500 text-navy-dark",
            BadgeVariant::Danger => "bg-red-600 text-white",
            BadgeVariant::Info => "bg-blue-500 text-white",
        }
    }
}

pub fn card_classes(variant: CardVariant, hoverable: bool, extra: Option<&str>) -> String {
    cn([
        "rounded-lg overflow-hidden",
        variant.classes(),
        if hoverable {
            "transition-transform duration-200 hover:-translate-y-1 hover:shadow-xl"
        } else {
            ""
        },
        extra.unwrap_or_default(),
    ])
}

#[component]
pub fn Card(
    #[props(default)] variant: CardVariant,
    #[props(default)] hoverable: bool,
    class: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: card_classes(variant, hoverable, class.as_deref()), {children} }
    }
}

#[component]
pub fn CardHeader(class: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: cn(["p-3 pb-0", class.as_deref().unwrap_or_default()]), {children} }
    }
}

#[component]
pub fn CardTitle(class: Option<String>, children: Element) -> Element {
    rsx! {
        h3 {
            class: cn(["text-sm font-semibold text-white truncate", class.as_deref().unwrap_or_default()]),
            {children}
        }
    }
}

#[component]
pub fn CardDescription(class: Option<String>, children: Element) -> Element {
    rsx! {
        p { class: cn(["text-xs text-gray-400 truncate", class.as_deref().unwrap_or_default()]), {children} }
    }
}

#[component]
pub fn CardBody(class: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: cn(["p-3", class.as_deref().unwrap_or_default()]), {children} }
    }
}

#[component]
pub fn CardFooter(class: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: cn(["flex items-center p-3 pt-0", class.as_deref().unwrap_or_default()]),
            {children}
        }
    }
}

/// Image filling the card width. A missing `src` renders a neutral
/// placeholder of the same shape.
#[component]
pub fn CardImage(
    src: Option<String>,
    alt: String,
    #[props(default = "aspect-[3/4]".to_string())] aspect: String,
) -> Element {
    rsx! {
        div { class: "relative w-full {aspect} bg-navy-dark",
            if let Some(src) = src {
                img {
                    class: "absolute inset-0 h-full w-full object-cover",
                    src,
                    alt,
                    loading: "lazy",
                }
            } else {
                div { class: "absolute inset-0 flex items-center justify-center text-3xl", "🎮" }
            }
        }
    }
}

#[component]
pub fn CardBadge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span {
            class: cn(["rounded px-1.5 py-0.5 text-[10px] font-bold uppercase", variant.classes()]),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_add_hover_lift() {
        let classes = card_classes(CardVariant::Elevated, true, None);

        assert!(classes.contains("shadow-lg"));
        assert!(classes.contains("hover:-translate-y-1"));
    }

    #[test]
    fn can_render_plain_card_classes() {
        assert_eq!(
            card_classes(CardVariant::Outline, false, Some("w-40")),
            "rounded-lg overflow-hidden border border-white/10 bg-transparent w-40"
        );
    }
}
