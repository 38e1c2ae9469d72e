use bluechip_core::ScrollLock;
use dioxus::prelude::*;
use std::rc::Rc;

mod components;
mod dom;
mod hooks;
#[cfg(feature = "server")]
mod server;
mod views;

use components::Shell;
use views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "web")]
    // Hydrate the application on the client
    dioxus::launch(App);

    // Launch axum on the server
    #[cfg(feature = "server")]
    {
        dioxus::logger::initialize_default();
        if let Err(err) = tokio::runtime::Runtime::new()
            .map_err(anyhow::Error::from)
            .and_then(|runtime| runtime.block_on(server::launch_server(App)))
        {
            tracing::error!("server stopped: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Root component. Provides the page scroll lock shared by every overlay and
/// mounts the router.
#[component]
fn App() -> Element {
    use_context_provider(|| ScrollLock::new(Rc::new(dom::BodyOverflow)));

    rsx! {
        document::Title { "{bluechip_core::config::SITE_CONFIG.name}" }
        document::Meta { name: "description", content: bluechip_core::config::SITE_CONFIG.description }
        document::Meta { name: "theme-color", content: bluechip_core::config::SITE_CONFIG.theme_color }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
