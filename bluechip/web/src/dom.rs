//! Thin wrappers over the browser APIs the components need.
//!
//! Every accessor returns a [`DomError`] instead of panicking when the
//! browser object is missing. Callers log the error and carry on, so a
//! failed measurement never takes rendering down with it. Nothing in here
//! may run during server rendering; call it from effects and event handlers.
use bluechip_core::routes::is_scrolled;
use bluechip_core::{PointerTarget, ScrollContainer, ScrollLockTarget, Visibility};
use thiserror::Error;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, MediaQueryList, Node, ScrollBehavior, ScrollToOptions,
    Window,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("No global window available")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Document has no body")]
    NoBody,
    #[error("Media query {0:?} is not supported")]
    UnsupportedQuery(String),
    #[error("JavaScript exception: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn viewport_width() -> Result<f64, DomError> {
    window()?
        .inner_width()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerWidth is not a number".to_string()))
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

/// Whether the page has scrolled far enough for the compact header style.
pub fn page_scrolled() -> Result<bool, DomError> {
    Ok(is_scrolled(scroll_y()?))
}

pub fn page_visibility() -> Result<Visibility, DomError> {
    Ok(if document()?.hidden() {
        Visibility::Hidden
    } else {
        Visibility::Visible
    })
}

pub fn media_query(query: &str) -> Result<MediaQueryList, DomError> {
    window()?
        .match_media(query)?
        .ok_or_else(|| DomError::UnsupportedQuery(query.to_string()))
}

/// Global objects a component can listen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalTarget {
    Window,
    Document,
}

impl GlobalTarget {
    pub fn resolve(self) -> Result<EventTarget, DomError> {
        Ok(match self {
            GlobalTarget::Window => window()?.into(),
            GlobalTarget::Document => document()?.into(),
        })
    }
}

/// Classifies a pointer-down by where its target sits in the tree.
pub fn pointer_target(
    event: &Event,
    overlay: Option<&Element>,
    toggle: Option<&Element>,
) -> PointerTarget {
    let Some(node) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
        return PointerTarget::Outside;
    };
    let contains = |element: Option<&Element>| element.is_some_and(|el| el.contains(Some(&node)));
    if contains(overlay) {
        PointerTarget::Overlay
    } else if contains(toggle) {
        PointerTarget::ToggleControl
    } else {
        PointerTarget::Outside
    }
}

/// A mounted, horizontally scrollable element.
#[derive(Debug, Clone)]
pub struct DomScrollContainer(pub Element);

impl ScrollContainer for DomScrollContainer {
    fn scroll_offset(&self) -> f64 {
        f64::from(self.0.scroll_left())
    }

    fn scroll_width(&self) -> f64 {
        f64::from(self.0.scroll_width())
    }

    fn client_width(&self) -> f64 {
        f64::from(self.0.client_width())
    }

    fn scroll_by(&self, delta: f64) {
        let options = ScrollToOptions::new();
        options.set_left(delta);
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_by_with_scroll_to_options(&options);
    }
}

/// Locks page scrolling through `document.body.style.overflow`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyOverflow;

impl BodyOverflow {
    fn apply(value: &str) -> Result<(), DomError> {
        let body = document()?.body().ok_or(DomError::NoBody)?;
        body.style().set_property("overflow", value)?;
        Ok(())
    }
}

impl ScrollLockTarget for BodyOverflow {
    fn set_scroll_locked(&self, locked: bool) {
        let value = if locked { "hidden" } else { "" };
        if let Err(err) = BodyOverflow::apply(value) {
            warn!("failed to set body overflow to {value:?}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_errors_read_well_in_logs() {
        assert_eq!(DomError::NoBody.to_string(), "Document has no body");
        assert_eq!(
            DomError::UnsupportedQuery("(hover)".to_string()).to_string(),
            "Media query \"(hover)\" is not supported"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use bluechip_core::{OverlayEvent, OverlayMenu, ScrollAffordance, ScrollLock};
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body() -> web_sys::HtmlElement {
        document().expect("document").body().expect("body")
    }

    fn body_overflow() -> String {
        body()
            .style()
            .get_property_value("overflow")
            .expect("overflow readable")
    }

    /// A 100px wide row holding 500px of content.
    fn overflowing_row() -> Element {
        let document = document().expect("document");
        let row = document.create_element("div").expect("create row");
        row.set_attribute("style", "width: 100px; overflow-x: auto;")
            .expect("style row");
        row.set_inner_html(r#"<div style="width: 500px; height: 10px;"></div>"#);
        body().append_child(&row).expect("append row");
        row
    }

    #[wasm_bindgen_test]
    fn can_clear_body_overflow_when_overlay_closes() {
        // Arrange
        let mut menu = OverlayMenu::new(ScrollLock::new(Rc::new(BodyOverflow)));

        // Act
        menu.handle(OverlayEvent::Toggle);
        let while_open = body_overflow();
        menu.handle(OverlayEvent::Key("Escape".to_string()));

        // Assert
        assert_eq!(while_open, "hidden");
        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn can_clear_body_overflow_when_open_overlay_drops() {
        let mut menu = OverlayMenu::new(ScrollLock::new(Rc::new(BodyOverflow)));
        menu.handle(OverlayEvent::Toggle);
        assert_eq!(body_overflow(), "hidden");

        drop(menu);

        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn can_follow_scroll_flags_of_real_element() {
        // Arrange
        let row = overflowing_row();
        let container = DomScrollContainer(row.clone());
        let mut affordance = ScrollAffordance::new();

        // Act
        affordance.refresh(Some(&container));
        let at_start = (affordance.can_scroll_left(), affordance.can_scroll_right());
        row.set_scroll_left(400);
        affordance.refresh(Some(&container));
        let at_end = (affordance.can_scroll_left(), affordance.can_scroll_right());
        row.remove();

        // Assert
        assert_eq!(at_start, (false, true));
        assert_eq!(at_end, (true, false));
    }

    #[wasm_bindgen_test]
    fn can_see_restored_scroll_position_without_scroll_event() {
        let body = body();
        body.style()
            .set_property("height", "3000px")
            .expect("tall body");
        let window = window().expect("window");

        window.scroll_to_with_x_and_y(0.0, 200.0);
        let scrolled = page_scrolled();
        window.scroll_to_with_x_and_y(0.0, 0.0);
        let at_top = page_scrolled();
        body.style().remove_property("height").expect("reset body");

        assert_eq!(scrolled, Ok(true));
        assert_eq!(at_top, Ok(false));
    }
}
