use crate::dom::GlobalTarget;
use dioxus::prelude::*;
use gloo_events::EventListener;
use tracing::warn;
use web_sys::Event;

/// Attaches `handler` to a global target once the component has mounted.
///
/// The listener lives in component state, so it is removed exactly once when
/// the component unmounts. Handlers that read signals see the value current
/// at the time the event fires.
pub fn use_global_listener<F>(target: GlobalTarget, event: &'static str, handler: F)
where
    F: FnMut(&Event) + Clone + 'static,
{
    let mut listener = use_signal(|| None::<EventListener>);

    use_effect(move || match target.resolve() {
        Ok(resolved) => {
            listener.set(Some(EventListener::new(&resolved, event, handler.clone())));
        }
        Err(err) => warn!("cannot listen for {event} on {target:?}: {err}"),
    });
}

pub fn use_window_listener<F>(event: &'static str, handler: F)
where
    F: FnMut(&Event) + Clone + 'static,
{
    use_global_listener(GlobalTarget::Window, event, handler)
}

pub fn use_document_listener<F>(event: &'static str, handler: F)
where
    F: FnMut(&Event) + Clone + 'static,
{
    use_global_listener(GlobalTarget::Document, event, handler)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PING: &str = "bluechip-ping";

    thread_local! {
        static HITS: Cell<usize> = const { Cell::new(0) };
        static MOUNTED: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
    }

    fn app() -> Element {
        let mounted = use_signal(|| true);
        use_hook(|| MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted)));

        rsx! {
            if mounted() {
                Listening {}
            }
        }
    }

    #[component]
    fn Listening() -> Element {
        use_document_listener(PING, |_| HITS.with(|hits| hits.set(hits.get() + 1)));
        rsx! {}
    }

    fn ping() {
        let event = Event::new(PING).expect("create event");
        crate::dom::document()
            .expect("document")
            .dispatch_event(&event)
            .expect("dispatch event");
    }

    #[wasm_bindgen_test]
    fn can_stop_receiving_events_after_unmount() {
        // Arrange
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        // Runs the mount effects, which attach the listener.
        dom.render_immediate_to_vec();

        // Act
        ping();
        let while_mounted = HITS.with(Cell::get);
        let mut mounted = MOUNTED.with(|slot| slot.borrow().expect("app rendered"));
        dom.in_runtime(|| mounted.set(false));
        dom.render_immediate_to_vec();
        ping();

        // Assert
        assert_eq!(while_mounted, 1);
        assert_eq!(HITS.with(Cell::get), 1);
    }
}
