use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

#[cfg(target_arch = "wasm32")]
use crate::animation::init_landing_timelines;
#[cfg(target_arch = "wasm32")]
use crate::bridge::window_loaded;
use crate::config::SiteConfig;
use crate::countdown::{now_ms, Remaining};
use crate::dialog::{trailer_url, ClickOrigin, DialogState, LightboxMedia};
use crate::hooks::use_interval;
use crate::theme::{apply_body_class, load_theme, toggle_theme, LANDING_SCHEME};

#[cfg(target_arch = "wasm32")]
const PRELOADER_DELAY_MS: u32 = 350;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MediaItem {
    kind: &'static str,
    href: &'static str,
    alt: &'static str,
    video: &'static str,
    thumbnail: &'static str,
}

const MEDIA_ITEMS: &[MediaItem] = &[
    MediaItem {
        kind: "image",
        href: "media/vice-city-beach.jpg",
        alt: "Sunset over the beach",
        video: "",
        thumbnail: "media/thumbs/vice-city-beach.jpg",
    },
    MediaItem {
        kind: "image",
        href: "media/neon-strip.jpg",
        alt: "Neon strip at night",
        video: "",
        thumbnail: "media/thumbs/neon-strip.jpg",
    },
    MediaItem {
        kind: "video",
        href: "#",
        alt: "Trailer 1",
        video: "QdBZY2fkU-0",
        thumbnail: "media/thumbs/trailer-1.jpg",
    },
    MediaItem {
        kind: "image",
        href: "media/everglades.jpg",
        alt: "Airboat in the swamp",
        video: "",
        thumbnail: "media/thumbs/everglades.jpg",
    },
];

#[component]
pub fn LandingPage() -> Element {
    let config = use_context::<SiteConfig>();
    let target_ms = use_hook(|| config.countdown_target_ms());
    let mut theme = use_signal(|| load_theme(LANDING_SCHEME));
    let preloader_hidden = use_signal(|| false);
    let mut remaining = use_signal(|| Remaining::between(target_ms, now_ms()));
    let mut lightbox = use_signal(DialogState::<LightboxMedia>::default);
    let mut trailer = use_signal(DialogState::<String>::default);

    use_effect(move || apply_body_class(&theme.peek()));

    #[cfg(target_arch = "wasm32")]
    {
        let mut preloader_hidden = preloader_hidden;
        use_hook(move || {
            spawn(async move {
                if let Err(message) = window_loaded().await {
                    tracing::debug!("landing: {message}");
                }
                TimeoutFuture::new(PRELOADER_DELAY_MS).await;
                preloader_hidden.set(true);
            })
        });
        use_hook(|| {
            spawn(async {
                if let Err(message) = init_landing_timelines().await {
                    tracing::debug!("landing: animations skipped: {message}");
                }
            })
        });
    }

    use_interval(1000, move || remaining.set(Remaining::between(target_ms, now_ms())));

    let state = theme();
    let [dd, hh, mm, ss] = remaining().parts();
    let preloader_class = if preloader_hidden() { "preloader hidden" } else { "preloader" };
    let lightbox_state = lightbox();
    let lightbox_class = lightbox_state.class("lightbox");
    let trailer_state = trailer();
    let trailer_class = trailer_state.class("modal trailer-modal");

    rsx! {
        document::Title { "Coming Soon" }
        div { id: "preloader", class: "{preloader_class}",
            div { class: "preloader-ring" }
        }
        header { class: "site-header",
            a { class: "brand", href: "#top", "VI" }
            button {
                id: "themeToggle",
                class: "theme-toggle",
                r#type: "button",
                aria_pressed: state.aria_pressed(),
                aria_label: "Toggle dark mode",
                onclick: move |_| toggle_theme(&mut theme.write()),
                "◐"
            }
        }
        main { id: "top",
            section { class: "hero",
                div { class: "gta-logo", "VI" }
                p { class: "hero-tagline", "Welcome to Leonida." }
                a {
                    id: "openTrailer",
                    class: "btn",
                    href: "#trailer",
                    onclick: move |event| {
                        event.prevent_default();
                        trailer.write().open(trailer_url());
                    },
                    "Watch Trailer"
                }
            }
            section { class: "story",
                div { class: "reveal-left",
                    h2 { "Two outlaws" }
                    p { "A story set across a sun-soaked state that never sleeps." }
                }
                div { class: "reveal-right",
                    h2 { "One state" }
                    p { "Beaches, swamps and neon streets, all open from day one." }
                }
            }
            div { class: "scene-divider", aria_hidden: "true",
                div { class: "layer layer-back" }
                div { class: "layer layer-mid" }
                div { class: "layer layer-front" }
            }
            section { class: "media",
                h2 { class: "reveal-left", "Media" }
                div { class: "media-grid",
                    for item in MEDIA_ITEMS.iter().copied() {
                        a {
                            key: "{item.thumbnail}",
                            class: "media-item",
                            href: item.href,
                            "data-type": item.kind,
                            "data-video": item.video,
                            onclick: move |event| {
                                event.prevent_default();
                                match LightboxMedia::from_item(item.kind, item.href, item.alt, item.video) {
                                    Some(media) => lightbox.write().open(media),
                                    None => tracing::debug!("landing: unsupported media type {}", item.kind),
                                }
                            },
                            img { src: item.thumbnail, alt: item.alt }
                        }
                    }
                }
            }
            section { class: "countdown",
                h2 { "Release countdown" }
                div { class: "countdown-grid",
                    div { class: "unit", span { id: "dd", "{dd}" } small { "Days" } }
                    div { class: "unit", span { id: "hh", "{hh}" } small { "Hours" } }
                    div { class: "unit", span { id: "mm", "{mm}" } small { "Minutes" } }
                    div { class: "unit", span { id: "ss", "{ss}" } small { "Seconds" } }
                }
            }
        }
        div {
            id: "lightbox",
            class: "{lightbox_class}",
            onclick: move |_| {
                lightbox.write().handle_click(ClickOrigin::Backdrop);
            },
            button {
                id: "lightboxClose",
                class: "modal-close",
                r#type: "button",
                onclick: move |event| {
                    event.stop_propagation();
                    lightbox.write().close();
                },
                "×"
            }
            div {
                id: "lightboxContent",
                class: "lightbox-content",
                onclick: move |event| {
                    event.stop_propagation();
                    lightbox.write().handle_click(ClickOrigin::Content);
                },
                {match lightbox_state.content() {
                    Some(LightboxMedia::Image { src, alt }) => rsx! {
                        img { src: "{src}", alt: "{alt}" }
                    },
                    Some(LightboxMedia::Video { url }) => rsx! {
                        iframe {
                            src: "{url}",
                            width: "100%",
                            height: "100%",
                            allow: "autoplay; encrypted-media; picture-in-picture",
                            allowfullscreen: true,
                        }
                    },
                    None => rsx! {},
                }}
            }
        }
        div {
            id: "trailer",
            class: "{trailer_class}",
            onclick: move |_| {
                trailer.write().handle_click(ClickOrigin::Backdrop);
            },
            div {
                class: "modal-content",
                onclick: move |event| {
                    event.stop_propagation();
                    trailer.write().handle_click(ClickOrigin::Content);
                },
                button {
                    id: "trailerClose",
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| trailer.write().close(),
                    "×"
                }
                div { class: "trailer-embed",
                    if let Some(url) = trailer_state.content() {
                        iframe {
                            src: "{url}",
                            allow: "autoplay; encrypted-media",
                            allowfullscreen: true,
                        }
                    }
                }
            }
        }
    }
}
