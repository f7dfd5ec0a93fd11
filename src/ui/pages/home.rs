use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::content::STATS,
    ui::components::{decor::SectionHeader, stat_card::StatCard},
    util::{assets, version::APP_TAGLINE},
};

struct QuickLink {
    route: Route,
    icon: &'static str,
    label: &'static str,
    description: &'static str,
}

fn quick_links() -> [QuickLink; 4] {
    [
        QuickLink {
            route: Route::About {},
            icon: "🚗",
            label: "About Us",
            description: "Learn about our company and mission",
        },
        QuickLink {
            route: Route::HowItWorks {},
            icon: "🔍",
            label: "How It Works",
            description: "Step-by-step import process",
        },
        QuickLink {
            route: Route::Calculator {},
            icon: "🧮",
            label: "Cost Calculator",
            description: "Estimate your import costs",
        },
        QuickLink {
            route: Route::Faq {},
            icon: "❓",
            label: "FAQ",
            description: "Common questions answered",
        },
    ]
}

#[component]
pub fn HomePage() -> Element {
    let hero_style = format!("background-image: url({});", assets::hero_data_uri());

    rsx! {
        section { class: "home-hero",
            div { class: "home-hero-bg", style: "{hero_style}" }
            div { class: "home-hero-overlay" }
            div { class: "home-hero-content",
                div { class: "home-hero-logo animate-slide-up",
                    span { class: "home-hero-mark", "ジャパワールド" }
                    span { class: "home-hero-name", "JapWorld" }
                }
                div { class: "animate-fade-in-delayed",
                    h1 { class: "home-hero-tagline shimmer", "{APP_TAGLINE}" }
                    p { class: "home-hero-lead muted",
                        "Trusted UK specialists in Japanese car imports, delivering quality, expertise, and a seamless experience"
                    }
                    p { class: "home-hero-notice shimmer", "Website Under Construction..." }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                SectionHeader {
                    kanji: "探索",
                    title: "Explore Our Services",
                    intro: "Discover everything you need to know about importing your dream car from Japan",
                }
                div { class: "grid grid-4",
                    for link in quick_links() {
                        Link { to: link.route.clone(), class: "shoji-card quick-link",
                            div { class: "corner corner-tl" }
                            div { class: "corner corner-tr" }
                            div { class: "icon-tile", "{link.icon}" }
                            h3 { class: "card-title", "{link.label}" }
                            p { class: "muted small", "{link.description}" }
                            span { class: "learn-more", "Learn More →" }
                        }
                    }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container grid grid-4",
                for stat in STATS.iter() {
                    StatCard { value: stat.value.to_string(), label: stat.label.to_string() }
                }
            }
        }
    }
}
