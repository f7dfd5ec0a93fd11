use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::util::version::{
    copyright_line, version_label, APP_NAME, BUSINESS_HOURS, CONTACT_EMAIL,
    CONTACT_PHONE_DISPLAY, CONTACT_PHONE_HREF,
};

#[component]
pub fn Shell(children: Element) -> Element {
    // Every page starts at the top, like a fresh page load.
    use_effect(|| {
        let _ = document::eval("window.scrollTo(0, 0);");
    });

    rsx! {
        div { class: "site",
            Navigation {}
            main { class: "site-main",
                div { class: "animate-fade-in", {children} }
            }
            Footer {}
        }
    }
}

#[component]
fn Navigation() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let menu_open = state.with(|st| st.mobile_menu_open);

    let close_menu = move |_: MouseEvent| state.with_mut(|st| st.mobile_menu_open = false);

    rsx! {
        nav { class: "site-nav",
            div { class: "container nav-bar",
                Link {
                    to: Route::Home {},
                    class: "nav-logo",
                    onclick: close_menu,
                    span { class: "nav-logo-mark", "ジャ" }
                    span { class: "nav-logo-text", "{APP_NAME}" }
                }

                div { class: "nav-links",
                    for (route, label) in Route::nav_links() {
                        NavLink {
                            active: current_route == route,
                            route,
                            label,
                            mobile: false,
                            on_navigate: close_menu,
                        }
                    }
                }

                button {
                    class: "nav-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| state.with_mut(|st| st.mobile_menu_open = !st.mobile_menu_open),
                    if menu_open { "✕" } else { "☰" }
                }
            }

            if menu_open {
                div { class: "nav-mobile",
                    for (route, label) in Route::nav_links() {
                        NavLink {
                            active: current_route == route,
                            route,
                            label,
                            mobile: true,
                            on_navigate: close_menu,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(
    active: bool,
    route: Route,
    label: &'static str,
    mobile: bool,
    on_navigate: EventHandler<MouseEvent>,
) -> Element {
    let class = match (mobile, active) {
        (false, false) => "nav-link",
        (false, true) => "nav-link active",
        (true, false) => "nav-mobile-link",
        (true, true) => "nav-mobile-link active",
    };

    rsx! {
        Link {
            to: route,
            class,
            onclick: move |evt| on_navigate.call(evt),
            "{label}"
        }
    }
}

#[component]
fn Footer() -> Element {
    let quick_links = [
        (Route::About {}, "About Us"),
        (Route::HowItWorks {}, "How It Works"),
        (Route::Services {}, "Services"),
        (Route::Auctions {}, "Auctions"),
        (Route::Faq {}, "FAQ"),
        (Route::Contact {}, "Contact"),
    ];

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div {
                    h4 { class: "footer-brand", "{APP_NAME}" }
                    p { class: "muted",
                        "Trusted specialists in Japanese car imports, delivering quality, expertise, and a seamless experience."
                    }
                }
                div {
                    h4 { class: "footer-heading", "Quick Links" }
                    ul { class: "footer-list",
                        for (route, label) in quick_links {
                            li { Link { to: route, class: "footer-link", "{label}" } }
                        }
                    }
                }
                div {
                    h4 { class: "footer-heading", "Contact" }
                    ul { class: "footer-list",
                        li { a { class: "footer-link", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" } }
                        li { a { class: "footer-link", href: "{CONTACT_PHONE_HREF}", "{CONTACT_PHONE_DISPLAY}" } }
                    }
                }
                div {
                    h4 { class: "footer-heading", "Business Hours" }
                    ul { class: "footer-list",
                        for (days, hours) in BUSINESS_HOURS.iter() {
                            li { class: "muted",
                                span { class: "footer-days", "{days}: " }
                                "{hours}"
                            }
                        }
                    }
                }
            }
            div { class: "container footer-bottom",
                p { class: "muted small", "{copyright_line()}" }
                p { class: "muted small", "{version_label()}" }
            }
        }
    }
}
