use super::{failure_report, ErrorFallback, Footer, Header};
use crate::views::Loading;
use crate::Route;
use dioxus::prelude::*;

/// Layout wrapping every page: header, routed content and footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "flex min-h-screen flex-col bg-navy text-white",
            Header {}
            main { class: "flex-1",
                ErrorBoundary {
                    handle_error: |errors: ErrorContext| {
                        let report = failure_report(&errors);
                        // handle_error runs inside the boundary's scope.
                        let boundary = current_scope_id().ok();
                        rsx! {
                            ErrorFallback {
                                report,
                                on_retry: move |_| {
                                    errors.clear_errors();
                                    if let Some(boundary) = boundary {
                                        needs_update_any(boundary);
                                    }
                                },
                            }
                        }
                    },
                    SuspenseBoundary {
                        fallback: |_| rsx! { Loading {} },
                        Outlet::<Route> {}
                    }
                }
            }
            Footer {}
        }
    }
}
