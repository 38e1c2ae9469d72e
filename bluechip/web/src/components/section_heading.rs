use dioxus::prelude::*;

/// Row title with optional controls aligned to the right.
#[component]
pub fn SectionHeading(title: String, children: Element) -> Element {
    rsx! {
        div { class: "mb-3 flex items-center justify-between",
            h2 { class: "text-lg font-bold uppercase tracking-wide text-white", "{title}" }
            div { class: "flex items-center gap-2", {children} }
        }
    }
}

#[component]
pub fn ViewAllLink(href: String, #[props(default = "SEE ALL".to_string())] label: String) -> Element {
    rsx! {
        Link {
            class: "rounded-md bg-navy-light px-3 py-1.5 text-xs font-semibold text-white hover:bg-navy-light/80",
            to: href,
            "{label}"
        }
    }
}
