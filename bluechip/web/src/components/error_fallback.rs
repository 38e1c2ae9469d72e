use super::{Button, ButtonAction, ButtonVariant, Container};
use bluechip_core::{routes, FailureReport};
use dioxus::prelude::*;
use tracing::error;

/// Builds a report from the first error captured by an error boundary.
pub fn failure_report(errors: &ErrorContext) -> FailureReport {
    let captured = errors.errors();
    match captured.first() {
        Some(first) => FailureReport::from_captured(&first.to_string()),
        None => FailureReport::new("Unknown error"),
    }
}

/// Page shown when rendering fails below an error boundary.
///
/// Development builds also show the message and a short trace excerpt.
#[component]
pub fn ErrorFallback(report: FailureReport, on_retry: EventHandler<()>) -> Element {
    use_hook(|| error!("rendering failed: {}", report.message));

    rsx! {
        Container { size: super::ContainerSize::Sm, class: "py-20 text-center",
            div { class: "text-6xl mb-4", "⚠️" }
            h1 { class: "text-3xl font-bold text-white mb-3", "Something Went Wrong" }
            p { class: "text-gray-400 mb-8",
                "Sorry, an unexpected error has occurred. Our team has been notified."
            }
            if cfg!(debug_assertions) {
                div { class: "mx-auto mb-8 max-w-xl rounded-lg bg-black/30 p-4 text-left font-mono text-xs text-red-300",
                    p { "{report.message}" }
                    if let Some(excerpt) = report.trace_excerpt() {
                        pre { class: "mt-2 whitespace-pre-wrap text-gray-400", "{excerpt}" }
                    }
                }
            }
            div { class: "flex justify-center gap-3",
                Button {
                    action: ButtonAction::Click(EventHandler::new(move |_| on_retry.call(()))),
                    variant: ButtonVariant::Primary,
                    "Try Again"
                }
                Button {
                    action: ButtonAction::Navigate(routes::HOME.to_string()),
                    variant: ButtonVariant::Outline,
                    "Go to Homepage"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static BOUNDARY: RefCell<Option<ErrorContext>> = const { RefCell::new(None) };
    }

    fn app() -> Element {
        rsx! {
            ErrorBoundary { handle_error: |_: ErrorContext| rsx! {}, Failing {} }
        }
    }

    #[component]
    fn Failing() -> Element {
        let errors = consume_context::<ErrorContext>();
        BOUNDARY.with(|slot| *slot.borrow_mut() = Some(errors));
        Err::<(), _>(std::io::Error::other("boom"))?;
        rsx! {}
    }

    #[test]
    fn can_report_headline_and_trace_of_render_failure() {
        // Arrange
        let mut dom = VirtualDom::new(app);

        // Act
        dom.rebuild_in_place();
        let errors = BOUNDARY
            .with(|slot| slot.borrow().clone())
            .expect("failing component ran");
        let report = failure_report(&errors);

        // Assert
        assert_eq!(report.message, "Custom { kind: Other, error: \"boom\" }");
        assert!(!report.message.contains('\n'));
        let excerpt = report.trace_excerpt().expect("trace has lines after the headline");
        assert!(excerpt.starts_with("In scope:"), "{excerpt}");
    }

    #[test]
    fn can_report_unknown_error_without_captures() {
        fn empty() -> Element {
            rsx! {
                ErrorBoundary { handle_error: |_: ErrorContext| rsx! {}, Healthy {} }
            }
        }

        let mut dom = VirtualDom::new(empty);
        dom.rebuild_in_place();
        let errors = BOUNDARY
            .with(|slot| slot.borrow().clone())
            .expect("component ran");

        let report = failure_report(&errors);

        assert_eq!(report.message, "Unknown error");
        assert_eq!(report.trace_excerpt(), None);
    }

    #[component]
    fn Healthy() -> Element {
        BOUNDARY.with(|slot| *slot.borrow_mut() = Some(consume_context::<ErrorContext>()));
        rsx! {}
    }
}
