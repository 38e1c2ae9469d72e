use bluechip_core::cn;
use dioxus::prelude::*;

/// What activating a button does: run a handler or navigate to a path.
#[derive(Clone, PartialEq)]
pub enum ButtonAction {
    Click(EventHandler<MouseEvent>),
    Navigate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
    Success,
    Dark,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-pink hover:bg-accent/90 text-white shadow",
            ButtonVariant::Secondary => "bg-navy-light hover:bg-navy-light/80 text-white",
            ButtonVariant::Outline => {
                "border border-white/20 bg-transparent hover:bg-white/10 text-white"
            }
            ButtonVariant::Ghost => "bg-transparent hover:bg-white/10 text-white",
            ButtonVariant::Link => "bg-transparent underline-offset-4 hover:underline text-pink p-0",
            ButtonVariant::Success => "bg-green-500 hover:bg-green-600 text-white shadow",
            ButtonVariant::Dark => "bg-navy-dark hover:bg-navy-dark/80 text-white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Icon,
    Pill,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-8 px-3 text-xs",
            ButtonSize::Md => "h-10 px-4 py-2 text-sm",
            ButtonSize::Lg => "h-12 px-6 text-base",
            ButtonSize::Icon => "h-9 w-9 p-0",
            ButtonSize::Pill => "h-10 px-6 rounded-full text-sm",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-md font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-pink disabled:pointer-events-none disabled:opacity-50";

pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    extra: Option<&str>,
) -> String {
    cn([
        BASE_CLASSES,
        variant.classes(),
        size.classes(),
        if full_width { "w-full" } else { "" },
        extra.unwrap_or_default(),
    ])
}

/// Renders as a router link for [`ButtonAction::Navigate`] and as a native
/// button otherwise.
#[component]
pub fn Button(
    action: Option<ButtonAction>,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] full_width: bool,
    #[props(default)] is_loading: bool,
    loading_text: Option<String>,
    #[props(default)] disabled: bool,
    left_icon: Option<String>,
    right_icon: Option<String>,
    class: Option<String>,
    aria_label: Option<String>,
    children: Element,
) -> Element {
    let class = button_classes(variant, size, full_width, class.as_deref());
    let content = if is_loading {
        let text = loading_text.unwrap_or_else(|| "Loading...".to_string());
        rsx! {
            span { class: "mr-2 inline-block h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent" }
            "{text}"
        }
    } else {
        rsx! {
            if let Some(icon) = left_icon {
                span { class: "mr-2", "{icon}" }
            }
            {children}
            if let Some(icon) = right_icon {
                span { class: "ml-2", "{icon}" }
            }
        }
    };

    match action {
        Some(ButtonAction::Navigate(href)) if !disabled && !is_loading => rsx! {
            Link { class, to: href, {content} }
        },
        Some(ButtonAction::Click(handler)) => rsx! {
            button {
                r#type: "button",
                class,
                disabled: disabled || is_loading,
                aria_label,
                onclick: move |evt| handler.call(evt),
                {content}
            }
        },
        _ => rsx! {
            button {
                r#type: "button",
                class,
                disabled: disabled || is_loading,
                aria_label,
                {content}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_compose_button_classes() {
        let classes = button_classes(ButtonVariant::Success, ButtonSize::Pill, true, Some("mt-2"));

        assert!(classes.starts_with("inline-flex"));
        assert!(classes.contains("bg-green-500"));
        assert!(classes.contains("rounded-full"));
        assert!(classes.ends_with("w-full mt-2"));
    }

    #[test]
    fn can_skip_empty_class_fragments() {
        let classes = button_classes(ButtonVariant::Primary, ButtonSize::Md, false, None);

        assert!(!classes.contains("  "));
        assert!(!classes.ends_with(' '));
    }
}
