use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::use_site_config;
use crate::landing::LandingPage;
use crate::portfolio::PortfolioPage;

const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

#[component]
pub fn App() -> Element {
    let config_resource = use_site_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "Loading" }
                div { class: "page loading",
                    h1 { "Loading..." }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(message)) => {
            tracing::error!("config: {message}");
            return rsx! {
                document::Title { "Config error" }
                div { class: "page loading",
                    h1 { "Config load failed" }
                    p { "{message}" }
                }
            };
        }
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "icon", href: "/favicon.ico" }
        document::Link { rel: "stylesheet", href: "/assets/main.css" }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Portfolio {},
    #[route("/landing")]
    Landing {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Portfolio() -> Element {
    rsx! { PortfolioPage {} }
}

#[component]
fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not found" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Portfolio {}, class: "btn", "Back to the portfolio" }
        }
    }
}
