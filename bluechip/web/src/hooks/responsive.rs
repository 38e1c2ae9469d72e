use super::use_window_listener;
use crate::dom;
use bluechip_core::ResponsiveObserver;
use dioxus::prelude::*;
use gloo_events::EventListener;
use tracing::warn;

fn measure(mut observer: Signal<ResponsiveObserver>) {
    match dom::viewport_width() {
        Ok(width) => {
            let mut next = *observer.peek();
            if next.observe(width) {
                observer.set(next);
            }
        }
        Err(err) => warn!("cannot measure viewport: {err}"),
    }
}

/// `true` while the viewport is narrower than `threshold`.
///
/// Reads `false` until the component has mounted, matching the server
/// render.
pub fn use_viewport_narrower_than(threshold: f64) -> Memo<bool> {
    let observer = use_signal(|| ResponsiveObserver::new(threshold));

    use_effect(move || measure(observer));
    use_window_listener("resize", move |_| measure(observer));

    use_memo(move || observer.read().is_narrow())
}

/// Tracks whether a CSS media query currently matches.
pub fn use_media_query(query: String) -> ReadOnlySignal<bool> {
    let mut matches = use_signal(|| false);
    let mut listener = use_signal(|| None::<EventListener>);

    use_effect(use_reactive!(|query| match dom::media_query(&query) {
        Ok(list) => {
            matches.set(list.matches());
            let watched = list.clone();
            listener.set(Some(EventListener::new(&list, "change", move |_| {
                matches.set(watched.matches());
            })));
        }
        Err(err) => {
            listener.set(None);
            warn!("cannot watch media query: {err}");
        }
    }));

    ReadOnlySignal::new(matches)
}
