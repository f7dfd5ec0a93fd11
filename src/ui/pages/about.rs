use dioxus::prelude::*;

use crate::{
    domain::content::{STATS, WHY_JAPAN},
    ui::components::{
        decor::{BrushAccent, PageHero, SectionHeader, ShojiCard},
        stat_card::StatCard,
    },
};

const VALUES: &[(&str, &str, &str)] = &[
    (
        "🛡",
        "Integrity",
        "Transparent pricing, honest assessments, and ethical business practices in every transaction.",
    ),
    (
        "🎯",
        "Precision",
        "Meticulous attention to detail in vehicle inspection, documentation, and logistics coordination.",
    ),
    (
        "❤",
        "Passion",
        "Genuine love for Japanese automotive culture drives our commitment to excellence.",
    ),
    (
        "🏆",
        "Excellence",
        "Continuous improvement and dedication to delivering the highest quality service.",
    ),
];

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        PageHero {
            kanji: "会社概要",
            title: "About JapWorld",
            intro: "Bridging Japan's legendary automotive heritage with enthusiasts worldwide through trusted, transparent, and expert import services.",
        }

        section { class: "section",
            div { class: "container grid grid-4",
                for stat in STATS.iter() {
                    StatCard { value: stat.value.to_string(), label: stat.label.to_string() }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container narrow",
                ShojiCard {
                    h2 { class: "card-heading", "Who We Are" }
                    p { class: "muted lead",
                        "JapWorld was founded on a simple principle: making Japan's exceptional automotive market accessible to enthusiasts worldwide. What started as a passion project has grown into a trusted international import service."
                    }
                    p { class: "muted lead",
                        "Our team combines deep expertise in Japanese automotive markets with extensive logistics experience. We understand not just the cars, but the culture and the regulations that make importing from Japan both an art and a science."
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                SectionHeader { kanji: "価値観", title: "Our Values" }
                div { class: "grid grid-2",
                    for (icon, title, description) in VALUES.iter() {
                        ShojiCard {
                            div { class: "card-row",
                                div { class: "icon-tile", "{icon}" }
                                h3 { class: "card-title", "{title}" }
                            }
                            p { class: "muted", "{description}" }
                        }
                    }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container narrow",
                ShojiCard {
                    h2 { class: "card-heading", "Why Import from Japan" }
                    p { class: "muted lead",
                        "Strict inspection standards (Shaken) keep vehicles meticulously maintained. Low average mileage, a culture of vehicle care, and access to models never sold elsewhere make Japan the world's premier source for quality used vehicles."
                    }
                    ul { class: "check-list grid grid-2",
                        for benefit in WHY_JAPAN.iter() {
                            li { span { class: "check", "✓" } "{benefit}" }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container narrow",
                ShojiCard {
                    h2 { class: "card-heading", "Trust, Transparency & Worldwide Delivery" }
                    p { class: "muted lead",
                        "Every vehicle we source comes with a detailed inspection report and honest evaluation. Our pricing is clear and comprehensive, with purchase price, shipping, duties, taxes, and service fees set out upfront."
                    }
                    p { class: "muted lead",
                        "Real-time tracking keeps you informed from auction win to final delivery, wherever in the world you are."
                    }
                }
            }
            BrushAccent { kanji: "信頼" }
        }
    }
}
