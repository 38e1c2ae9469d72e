use bluechip_core::cn;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Full,
}

impl ContainerSize {
    fn max_width(self) -> &'static str {
        match self {
            ContainerSize::Sm => "max-w-3xl",
            ContainerSize::Md => "max-w-5xl",
            ContainerSize::Lg => "max-w-7xl",
            ContainerSize::Xl => "max-w-screen-2xl",
            ContainerSize::Full => "max-w-full",
        }
    }
}

/// Centered page column. `fluid` drops the max width.
#[component]
pub fn Container(
    #[props(default)] size: ContainerSize,
    #[props(default)] fluid: bool,
    class: Option<String>,
    children: Element,
) -> Element {
    let class = cn([
        "mx-auto w-full px-4 sm:px-6 lg:px-8",
        if fluid { "" } else { size.max_width() },
        class.as_deref().unwrap_or_default(),
    ]);

    rsx! {
        div { class, {children} }
    }
}
