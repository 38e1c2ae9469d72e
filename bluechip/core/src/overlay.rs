//! Mobile navigation overlay.
//!
//! Closed → Open only through an explicit toggle. Open → Closed through the
//! toggle or close button, a pointer-down outside both the overlay and its
//! toggle control, the Escape key, choosing a link, or a route change.
//!
//! While open the menu holds a [`ScrollLockGuard`]; leaving the open state in
//! any way, including dropping the menu, releases it.
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use tracing::debug;

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
}

/// Where a pointer-down landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Overlay,
    ToggleControl,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    Toggle,
    Close,
    PointerDown(PointerTarget),
    Key(String),
    LinkSelected,
    RouteChanged,
}

/// A state change caused by an event. Document listeners are attached on
/// `Opened` and removed on `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
}

#[derive(Debug)]
pub struct OverlayMenu {
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl OverlayMenu {
    /// A closed menu that will take `lock` whenever it opens.
    pub fn new(lock: ScrollLock) -> Self {
        OverlayMenu { lock, guard: None }
    }

    /// Open exactly while the menu holds a scroll lock guard.
    pub fn state(&self) -> OverlayState {
        if self.guard.is_some() {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }

    /// Shorthand for `state() == OverlayState::Open`.
    pub fn is_open(&self) -> bool {
        self.state() == OverlayState::Open
    }

    /// Outside-click and Escape listeners are only needed while open.
    pub fn listeners_active(&self) -> bool {
        self.is_open()
    }

    /// Accessible label of the toggle button for the current state.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_open() {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// Applies a UI event. Returns the transition it caused, if any.
    pub fn handle(&mut self, event: OverlayEvent) -> Option<Transition> {
        let closes = match (&event, self.state()) {
            (OverlayEvent::Toggle, OverlayState::Closed) => return self.open(),
            (_, OverlayState::Closed) => false,
            (OverlayEvent::Toggle | OverlayEvent::Close, _) => true,
            (OverlayEvent::PointerDown(target), _) => *target == PointerTarget::Outside,
            (OverlayEvent::Key(key), _) => key == ESCAPE_KEY,
            (OverlayEvent::LinkSelected | OverlayEvent::RouteChanged, _) => true,
        };
        if closes {
            debug!(?event, "closing overlay menu");
            self.close()
        } else {
            None
        }
    }

    /// Opens the menu and locks page scroll. Does nothing when already open.
    pub fn open(&mut self) -> Option<Transition> {
        if self.guard.is_some() {
            return None;
        }
        self.guard = Some(self.lock.acquire());
        Some(Transition::Opened)
    }

    /// Closes the menu and releases its scroll lock guard. Does nothing when
    /// already closed.
    pub fn close(&mut self) -> Option<Transition> {
        self.guard.take().map(|_| Transition::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::ScrollLockTarget;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Body {
        locked: Cell<bool>,
    }

    impl ScrollLockTarget for Body {
        fn set_scroll_locked(&self, locked: bool) {
            self.locked.set(locked);
        }
    }

    fn menu() -> (OverlayMenu, Rc<Body>) {
        let body = Rc::new(Body::default());
        let menu = OverlayMenu::new(ScrollLock::new(body.clone()));
        (menu, body)
    }

    fn closing_events() -> Vec<OverlayEvent> {
        vec![
            OverlayEvent::Toggle,
            OverlayEvent::Close,
            OverlayEvent::PointerDown(PointerTarget::Outside),
            OverlayEvent::Key("Escape".to_string()),
            OverlayEvent::LinkSelected,
            OverlayEvent::RouteChanged,
        ]
    }

    #[test]
    fn can_start_closed_and_unlocked() {
        let (menu, body) = menu();

        assert_eq!(menu.state(), OverlayState::Closed);
        assert!(!menu.listeners_active());
        assert!(!body.locked.get());
    }

    #[test]
    fn can_open_and_lock_scroll_with_toggle() {
        let (mut menu, body) = menu();

        assert_eq!(menu.handle(OverlayEvent::Toggle), Some(Transition::Opened));

        assert!(menu.is_open());
        assert!(menu.listeners_active());
        assert!(body.locked.get());
        assert_eq!(menu.toggle_label(), "Close menu");
    }

    #[test]
    fn can_release_lock_on_every_close_path() {
        for event in closing_events() {
            let (mut menu, body) = menu();
            menu.handle(OverlayEvent::Toggle);

            assert_eq!(
                menu.handle(event.clone()),
                Some(Transition::Closed),
                "{event:?} should close the menu"
            );
            assert!(!body.locked.get(), "{event:?} left the page locked");
            assert!(!menu.listeners_active());
        }
    }

    #[test]
    fn cannot_open_without_toggle() {
        for event in closing_events().into_iter().skip(1) {
            let (mut menu, body) = menu();

            assert_eq!(menu.handle(event), None);
            assert!(!menu.is_open());
            assert!(!body.locked.get());
        }
    }

    #[test]
    fn cannot_close_from_clicks_inside_overlay_or_on_toggle() {
        let (mut menu, body) = menu();
        menu.handle(OverlayEvent::Toggle);

        assert_eq!(
            menu.handle(OverlayEvent::PointerDown(PointerTarget::Overlay)),
            None
        );
        assert_eq!(
            menu.handle(OverlayEvent::PointerDown(PointerTarget::ToggleControl)),
            None
        );
        assert!(menu.is_open());
        assert!(body.locked.get());
    }

    #[test]
    fn cannot_close_with_other_keys() {
        let (mut menu, _) = menu();
        menu.handle(OverlayEvent::Toggle);

        assert_eq!(menu.handle(OverlayEvent::Key("Enter".to_string())), None);
        assert!(menu.is_open());
    }

    #[test]
    fn can_unlock_by_dropping_open_menu() {
        let (mut menu, body) = menu();
        menu.handle(OverlayEvent::Toggle);

        drop(menu);

        assert!(!body.locked.get());
    }

    #[test]
    fn can_unlock_after_any_sequence_ending_closed() {
        let (mut menu, body) = menu();
        let script = [
            OverlayEvent::Toggle,
            OverlayEvent::PointerDown(PointerTarget::Overlay),
            OverlayEvent::Toggle,
            OverlayEvent::Toggle,
            OverlayEvent::Key("Escape".to_string()),
            OverlayEvent::Key("Escape".to_string()),
            OverlayEvent::Toggle,
            OverlayEvent::RouteChanged,
            OverlayEvent::LinkSelected,
        ];

        for event in script {
            menu.handle(event);
            assert_eq!(body.locked.get(), menu.is_open());
        }

        assert!(!menu.is_open());
        assert!(!body.locked.get());
    }
}
