//! Site header with the desktop nav and the mobile overlay menu.
use super::icons::MenuIcon;
use super::{Button, ButtonAction, ButtonSize, ButtonVariant, Container};
use crate::dom;
use crate::hooks::{use_document_listener, use_window_listener};
use crate::Route;
use bluechip_core::config::SITE_CONFIG;
use bluechip_core::data::nav_items;
use bluechip_core::{cn, routes, OverlayEvent, OverlayMenu, ScrollLock};
use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

const OVERLAY_ID: &str = "mobile-menu";

#[component]
pub fn Header() -> Element {
    let lock = use_context::<ScrollLock>();
    let mut menu = use_signal(|| OverlayMenu::new(lock));
    let overlay_element = use_signal(|| None::<web_sys::Element>);
    let mut toggle_element = use_signal(|| None::<web_sys::Element>);
    let mut scrolled = use_signal(|| false);

    let route = use_route::<Route>();
    let current_path = route.to_string();

    use_effect(use_reactive((&route,), move |_| {
        if menu.peek().is_open() {
            menu.write().handle(OverlayEvent::RouteChanged);
        }
    }));

    let mut measure_scroll = move || match dom::page_scrolled() {
        Ok(next) => {
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        }
        Err(err) => warn!("cannot read scroll position: {err}"),
    };
    // A reload can restore the page part way down.
    use_effect(move || measure_scroll());
    use_window_listener("scroll", move |_| measure_scroll());

    let open = menu.read().is_open();
    let header_class = cn([
        "sticky top-0 z-40 w-full transition-colors duration-300",
        if scrolled() {
            "bg-navy-dark/90 backdrop-blur shadow-lg"
        } else {
            "bg-navy-dark"
        },
    ]);

    rsx! {
        header { class: header_class,
            Container { class: "flex h-16 items-center justify-between gap-4",
                Link { class: "text-xl font-extrabold tracking-wide text-white", to: routes::HOME,
                    "{SITE_CONFIG.name}"
                }
                nav { class: "hidden items-center gap-6 lg:flex", aria_label: "Main navigation",
                    for item in nav_items() {
                        Link {
                            key: "{item.href}",
                            class: nav_link_class(routes::is_active(&current_path, item.href)),
                            to: item.href,
                            "{item.label}"
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    div { class: "hidden gap-2 sm:flex",
                        Button {
                            action: ButtonAction::Navigate(routes::LOGIN.to_string()),
                            variant: ButtonVariant::Dark,
                            size: ButtonSize::Sm,
                            "LOGIN"
                        }
                        Button {
                            action: ButtonAction::Navigate(routes::REGISTER.to_string()),
                            variant: ButtonVariant::Success,
                            size: ButtonSize::Sm,
                            "REGISTRATION"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "rounded-md p-2 text-white hover:bg-white/10 lg:hidden",
                        aria_expanded: open,
                        aria_controls: OVERLAY_ID,
                        aria_label: menu.read().toggle_label(),
                        onmounted: move |evt| toggle_element.set(evt.data().downcast::<web_sys::Element>().cloned()),
                        onclick: move |_| {
                            menu.write().handle(OverlayEvent::Toggle);
                        },
                        MenuIcon { open }
                    }
                }
            }
            if open {
                MobileMenu { menu, overlay_element, current_path: current_path.clone() }
                OverlayListeners { menu, overlay_element, toggle_element }
            }
        }
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "text-sm font-semibold text-pink"
    } else {
        "text-sm font-semibold text-white hover:text-pink"
    }
}

#[component]
fn MobileMenu(
    mut menu: Signal<OverlayMenu>,
    mut overlay_element: Signal<Option<web_sys::Element>>,
    current_path: String,
) -> Element {
    rsx! {
        div {
            id: OVERLAY_ID,
            class: "fixed inset-x-0 bottom-0 top-16 z-50 overflow-y-auto bg-navy-dark px-6 py-8 lg:hidden",
            role: "dialog",
            aria_modal: "true",
            aria_label: "Main menu",
            onmounted: move |evt| overlay_element.set(evt.data().downcast::<web_sys::Element>().cloned()),
            div { class: "flex justify-end",
                button {
                    r#type: "button",
                    class: "rounded-md px-3 py-1 text-sm text-gray-300 hover:text-white",
                    aria_label: "Close menu",
                    onclick: move |_| {
                        menu.write().handle(OverlayEvent::Close);
                    },
                    "✕"
                }
            }
            nav { class: "mt-4 flex flex-col gap-4",
                for item in nav_items() {
                    Link {
                        key: "{item.href}",
                        class: nav_link_class(routes::is_active(&current_path, item.href)),
                        to: item.href,
                        onclick: move |_| {
                            menu.write().handle(OverlayEvent::LinkSelected);
                        },
                        "{item.label}"
                    }
                }
            }
            div { class: "mt-8 flex flex-col gap-3",
                Button {
                    action: ButtonAction::Navigate(routes::LOGIN.to_string()),
                    variant: ButtonVariant::Dark,
                    full_width: true,
                    "LOGIN"
                }
                Button {
                    action: ButtonAction::Navigate(routes::REGISTER.to_string()),
                    variant: ButtonVariant::Success,
                    full_width: true,
                    "REGISTRATION"
                }
            }
        }
    }
}

/// Document listeners that dismiss the open menu. Mounted only while the
/// menu is open, so they are attached on open and dropped on close.
#[component]
fn OverlayListeners(
    menu: Signal<OverlayMenu>,
    overlay_element: Signal<Option<web_sys::Element>>,
    toggle_element: Signal<Option<web_sys::Element>>,
) -> Element {
    let mut on_pointer = menu;
    use_document_listener("mousedown", move |event| {
        let target = dom::pointer_target(
            event,
            overlay_element.peek().as_ref(),
            toggle_element.peek().as_ref(),
        );
        on_pointer.write().handle(OverlayEvent::PointerDown(target));
    });

    let mut on_key = menu;
    use_document_listener("keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            on_key.write().handle(OverlayEvent::Key(event.key()));
        }
    });

    rsx! {}
}
