//! Scroll affordance shared by every horizontally scrollable row.
//!
//! A row can scroll left once it has moved away from its origin, and right
//! while its visible edge sits more than [`SCROLL_EDGE_BUFFER`] units before the
//! end of the content. The buffer absorbs sub-pixel rounding from the browser.
use tracing::trace;

/// Slack subtracted from the right edge before it counts as reachable.
pub const SCROLL_EDGE_BUFFER: f64 = 5.0;

/// A horizontally scrollable element.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollContainer {
    /// Current horizontal scroll offset.
    fn scroll_offset(&self) -> f64;
    /// Total width of the scrollable content.
    fn scroll_width(&self) -> f64;
    /// Width of the visible viewport of the container.
    fn client_width(&self) -> f64;
    /// Smoothly shifts the viewport by `delta` units (negative moves left).
    fn scroll_by(&self, delta: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Whether a row can scroll further in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollPosition {
    /// Computes both flags from raw container measurements.
    pub fn measure(offset: f64, scroll_width: f64, client_width: f64) -> Self {
        ScrollPosition {
            can_scroll_left: offset > 0.0,
            can_scroll_right: offset < scroll_width - client_width - SCROLL_EDGE_BUFFER,
        }
    }

    /// Measures a live container.
    pub fn of<C: ScrollContainer + ?Sized>(container: &C) -> Self {
        Self::measure(
            container.scroll_offset(),
            container.scroll_width(),
            container.client_width(),
        )
    }
}

/// Tracks the [`ScrollPosition`] of one container and drives its scroll buttons.
///
/// Every operation takes the container as an `Option`: before the element is
/// mounted there is nothing to measure or move, and the call does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollAffordance {
    position: ScrollPosition,
}

impl ScrollAffordance {
    /// Both directions disabled until the first refresh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags from the last refresh.
    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    /// Whether the left button should be shown.
    pub fn can_scroll_left(&self) -> bool {
        self.position.can_scroll_left
    }

    /// Whether the right button should be shown.
    pub fn can_scroll_right(&self) -> bool {
        self.position.can_scroll_right
    }

    /// Re-measures the container. Returns true when the flags changed.
    pub fn refresh<C: ScrollContainer + ?Sized>(&mut self, container: Option<&C>) -> bool {
        let Some(container) = container else {
            return false;
        };
        let next = ScrollPosition::of(container);
        if next == self.position {
            return false;
        }
        trace!(?next, "scroll position changed");
        self.position = next;
        true
    }

    /// Moves the container half a view to the left.
    pub fn scroll_left<C: ScrollContainer + ?Sized>(&self, container: Option<&C>) {
        Self::scroll(container, ScrollDirection::Left);
    }

    /// Moves the container half a view to the right.
    pub fn scroll_right<C: ScrollContainer + ?Sized>(&self, container: Option<&C>) {
        Self::scroll(container, ScrollDirection::Right);
    }

    /// Moves the container by half its visible width. Repeated calls compound
    /// through the container's own scroll position; there is no debounce.
    pub fn scroll<C: ScrollContainer + ?Sized>(container: Option<&C>, direction: ScrollDirection) {
        let Some(container) = container else {
            return;
        };
        let step = container.client_width() / 2.0;
        let delta = match direction {
            ScrollDirection::Left => -step,
            ScrollDirection::Right => step,
        };
        container.scroll_by(delta);
    }
}
