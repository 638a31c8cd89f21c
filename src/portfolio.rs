use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

#[cfg(target_arch = "wasm32")]
use crate::animation::init_aos;
use crate::animation::AOS_STYLES;
use crate::certificates::{CertificateView, CERTIFICATE_CARDS};
use crate::contact::ContactSection;
use crate::date::{current_year, india_time_now};
use crate::dialog::{ClickOrigin, DialogState, ProjectView};
use crate::hooks::{use_intersection, use_interval, use_window_listener, window_scroll_y, ObserveOptions};
use crate::projects::{display_style, ProjectFilter, FILTERS, PROJECTS};
use crate::reveal::{
    header_background, MobileNav, ScrollSpy, SkillReveal, SKILLS, SKILLS_THRESHOLD,
    SPY_ROOT_MARGIN,
};
use crate::theme::{apply_body_class, load_theme, toggle_theme, Theme, PORTFOLIO_SCHEME};
#[cfg(target_arch = "wasm32")]
use crate::typewriter::{Typewriter, START_DELAY_MS};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#certificates", "Certificates"),
    ("#contact", "Contact"),
];

#[component]
pub fn PortfolioPage() -> Element {
    let mut theme = use_signal(|| load_theme(PORTFOLIO_SCHEME));
    let mut nav = use_signal(MobileNav::default);
    let typed = use_signal(String::new);
    let mut skills = use_signal(SkillReveal::default);
    let mut spy = use_signal(ScrollSpy::default);
    let mut scroll_y = use_signal(window_scroll_y);
    let mut india_time = use_signal(india_time_now);
    let year = use_hook(current_year);

    use_effect(move || apply_body_class(&theme.peek()));

    #[cfg(target_arch = "wasm32")]
    {
        let mut typed = typed;
        use_hook(move || {
            spawn(async move {
                let mut typewriter = Typewriter::default();
                let mut delay = START_DELAY_MS;
                loop {
                    TimeoutFuture::new(delay).await;
                    let frame = typewriter.tick();
                    typed.set(frame.text);
                    delay = frame.next_delay_ms;
                }
            })
        });
        use_hook(|| {
            spawn(async {
                if let Err(message) = init_aos().await {
                    tracing::debug!("portfolio: animations skipped: {message}");
                }
            })
        });
    }

    use_interval(1000, move || india_time.set(india_time_now()));
    use_window_listener("scroll", move || scroll_y.set(window_scroll_y()));
    use_intersection(
        "#skills",
        ObserveOptions::Threshold(SKILLS_THRESHOLD),
        move |_, intersecting| skills.write().observe(intersecting),
    );
    use_intersection(
        "section",
        ObserveOptions::RootMargin(SPY_ROOT_MARGIN),
        move |id, intersecting| spy.write().observe(&id, intersecting),
    );

    let light_mode = theme().current == Theme::Light;
    let header_style = format!("background: {};", header_background(scroll_y(), light_mode));
    let theme_icon = if light_mode { "fa-solid fa-moon" } else { "fa-solid fa-sun" };

    rsx! {
        document::Title { "Portfolio" }
        document::Link { rel: "stylesheet", href: AOS_STYLES }
        header { style: "{header_style}",
            nav { class: "navbar",
                a { class: "logo", href: "#home", "Portfolio" }
                ul { class: "{nav().menu_class()}",
                    for (href, label) in NAV_LINKS.iter().copied() {
                        li { key: "{href}",
                            a {
                                class: "{spy.read().link_class(href)}",
                                href: "{href}",
                                onclick: move |_| nav.write().close(),
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    id: "theme-toggle",
                    class: "theme-toggle",
                    r#type: "button",
                    onclick: move |_| toggle_theme(&mut theme.write()),
                    i { class: "{theme_icon}" }
                }
                button {
                    id: "hamburg",
                    class: "hamburg",
                    r#type: "button",
                    onclick: move |_| nav.write().toggle(),
                    i { class: "fa-solid fa-bars" }
                }
            }
        }
        main {
            section { id: "home", class: "hero",
                h1 { "Hi, I'm a " span { class: "typewriter-text", "{typed}" } }
                p { class: "hero-subtitle", "I build things for the web and for the viewport." }
                a { class: "btn btn-primary", href: "#projects", "View Work" }
            }
            section { id: "about", class: "about", "data-aos": "fade-up",
                h2 { class: "section-title", "About Me" }
                p { "Frontend developer and 3D artist who enjoys turning ideas into interactive pages." }
            }
            SkillsSection { reveal: skills() }
            ProjectsSection {}
            CertificatesSection {}
            ContactSection {}
        }
        footer { class: "footer",
            p { "© " span { id: "current-year", "{year}" } " All rights reserved." }
            p { "India time: " span { id: "india-time", "{india_time}" } }
        }
    }
}

#[component]
fn SkillsSection(reveal: SkillReveal) -> Element {
    rsx! {
        section { id: "skills", class: "skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-list",
                for skill in SKILLS.iter() {
                    div { key: "{skill.label}", class: "skill",
                        div { class: "skill-info",
                            span { "{skill.label}" }
                            span { "{skill.width}" }
                        }
                        div { class: "skill-bar",
                            div {
                                class: "skill-progress",
                                "data-width": skill.width,
                                style: "{reveal.bar_style(skill)}",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectsSection() -> Element {
    let mut filter = use_signal(ProjectFilter::default);
    let mut dialog = use_signal(DialogState::<ProjectView>::default);

    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "filter-buttons",
                for choice in FILTERS.iter().copied() {
                    button {
                        key: "{choice.filter}",
                        class: if filter.read().is_active(choice.filter) { "filter-btn active" } else { "filter-btn" },
                        "data-filter": choice.filter,
                        onclick: move |_| filter.write().select(choice.filter),
                        "{choice.label}"
                    }
                }
            }
            div { class: "projects-grid",
                for project in PROJECTS.iter().copied() {
                    div {
                        key: "{project.title}",
                        class: "project-card",
                        "data-category": project.category,
                        "data-project-url": project.url,
                        "data-project-title": project.title,
                        style: display_style(filter.read().shows(project.category)),
                        onclick: move |_| {
                            if let Some(view) = ProjectView::from_card(project.url, project.title) {
                                dialog.write().open(view);
                            }
                        },
                        h3 { "{project.title}" }
                        p { "{project.summary}" }
                    }
                }
            }
        }
        ProjectModal { dialog }
    }
}

#[component]
fn ProjectModal(dialog: Signal<DialogState<ProjectView>>) -> Element {
    let mut dialog = dialog;
    let state = dialog();
    let modal_class = state.class("project-modal");
    let view = state.content().cloned();

    rsx! {
        div {
            id: "project-modal",
            class: "{modal_class}",
            onclick: move |_| {
                dialog.write().handle_click(ClickOrigin::Backdrop);
            },
            if let Some(view) = view {
                div {
                    id: "project-modal-content",
                    class: view.content_class(),
                    onclick: move |event| {
                        event.stop_propagation();
                        dialog.write().handle_click(ClickOrigin::Content);
                    },
                    div { class: "project-modal-header",
                        h3 { id: "project-modal-title", "{view.title}" }
                        div { class: "project-modal-actions",
                            a {
                                id: "project-modal-new-tab",
                                href: "{view.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                i { class: "fa-solid fa-arrow-up-right-from-square" }
                            }
                            button {
                                id: "project-modal-fullscreen",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Some(open) = dialog.write().content_mut() {
                                        open.toggle_fullscreen();
                                    }
                                },
                                i { class: view.icon_class() }
                            }
                            button {
                                id: "project-modal-close",
                                r#type: "button",
                                onclick: move |_| dialog.write().close(),
                                i { class: "fa-solid fa-xmark" }
                            }
                        }
                    }
                    iframe {
                        id: "project-modal-iframe",
                        src: "{view.url}",
                        title: "{view.title}",
                    }
                }
            }
        }
    }
}

#[component]
fn CertificatesSection() -> Element {
    let mut view = use_signal(CertificateView::default);
    let mut dialog = use_signal(DialogState::<()>::default);
    let current = view();
    let modal_class = dialog.read().class("modal");

    rsx! {
        section { id: "certificates", class: "certificates",
            h2 { class: "section-title", "Certificates" }
            div { class: "certificates-grid",
                for (id, label) in CERTIFICATE_CARDS.iter().copied() {
                    div {
                        key: "{id}",
                        class: "certificate-card",
                        "data-certificate": id,
                        "data-aos": "zoom-in",
                        onclick: move |_| {
                            view.write().select(id);
                            dialog.write().open(());
                        },
                        h3 { "{label}" }
                    }
                }
            }
        }
        div {
            id: "certificate-modal",
            class: "{modal_class}",
            onclick: move |_| {
                dialog.write().handle_click(ClickOrigin::Backdrop);
            },
            div {
                class: "modal-content",
                onclick: move |event| {
                    event.stop_propagation();
                    dialog.write().handle_click(ClickOrigin::Content);
                },
                button {
                    id: "modal-close",
                    r#type: "button",
                    onclick: move |_| dialog.write().close(),
                    i { class: "fa-solid fa-xmark" }
                }
                if let Some(notice) = current.notice.as_ref() {
                    p { class: "modal-notice", role: "alert", "{notice}" }
                }
                if let Some(certificate) = current.shown {
                    img { id: "modal-image", src: certificate.image, alt: certificate.title }
                    h3 { id: "modal-title", "{certificate.title}" }
                    p { id: "modal-issuer", "{certificate.issuer}" }
                    p { id: "modal-desc", "{certificate.description}" }
                }
            }
        }
    }
}
