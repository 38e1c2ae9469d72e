use super::use_window_listener;
use crate::dom::DomScrollContainer;
use bluechip_core::ScrollAffordance;
use dioxus::prelude::*;

/// Scroll state of one horizontally scrollable row.
///
/// The row element registers itself through [`ScrollRow::attach`] from its
/// `onmounted` handler and calls [`ScrollRow::refresh`] from `onscroll`. The
/// hook refreshes on window resize and whenever `items` changes.
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollRow {
    affordance: Signal<ScrollAffordance>,
    container: Signal<Option<DomScrollContainer>>,
}

impl ScrollRow {
    pub fn can_scroll_left(&self) -> bool {
        self.affordance.read().can_scroll_left()
    }

    pub fn can_scroll_right(&self) -> bool {
        self.affordance.read().can_scroll_right()
    }

    pub fn attach(&mut self, event: MountedEvent) {
        let element = event.data().downcast::<web_sys::Element>().cloned();
        self.container.set(element.map(DomScrollContainer));
        self.refresh();
    }

    pub fn refresh(&mut self) {
        let mut next = *self.affordance.peek();
        if next.refresh(self.container.peek().as_ref()) {
            self.affordance.set(next);
        }
    }

    pub fn scroll_left(&self) {
        self.affordance
            .peek()
            .scroll_left(self.container.peek().as_ref());
    }

    pub fn scroll_right(&self) {
        self.affordance
            .peek()
            .scroll_right(self.container.peek().as_ref());
    }
}

pub fn use_scroll_row<T>(items: T) -> ScrollRow
where
    T: Clone + PartialEq + 'static,
{
    let mut row = ScrollRow {
        affordance: use_signal(ScrollAffordance::new),
        container: use_signal(|| None),
    };

    use_window_listener("resize", move |_| row.refresh());
    use_effect(use_reactive((&items,), move |_| row.refresh()));

    row
}
