use dioxus::prelude::*;

use crate::{
    domain::search_auction_houses,
    ui::components::decor::{BrushAccent, PageHero, SectionHeader, ShojiCard},
};

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🔎",
        "Advanced Search",
        "Filter by make, model, year, mileage, grade, and price range. Find exactly what you're looking for.",
    ),
    (
        "📅",
        "Live Auctions",
        "Browse upcoming auctions and view live bidding. Never miss an opportunity.",
    ),
    (
        "⚙",
        "Smart Filters",
        "Grade ratings, condition reports, and detailed vehicle information at your fingertips.",
    ),
    (
        "🔔",
        "Auction Alerts",
        "Set up personalized alerts for your dream car. Get notified when matching vehicles appear.",
    ),
];

#[component]
pub fn AuctionsPage() -> Element {
    let mut query = use_signal(String::new);
    let houses = search_auction_houses(&query());

    rsx! {
        PageHero {
            kanji: "競売検索",
            title: "Japanese Auctions",
            intro: "Access Japan's premier auction houses. Search thousands of vehicles, set alerts, and find your perfect car.",
        }

        section { class: "section",
            div { class: "container narrow",
                ShojiCard {
                    form {
                        class: "search-bar",
                        onsubmit: move |evt: FormEvent| evt.prevent_default(),
                        input {
                            class: "field-input",
                            r#type: "search",
                            placeholder: "Search by make, model, year...",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Search" }
                    }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container",
                SectionHeader {
                    kanji: "競売所",
                    title: "Major Auction Houses",
                    intro: "We have access to all major Japanese auction facilities",
                }
                if houses.is_empty() {
                    p { class: "muted empty-state", "No auction houses match \"{query}\"." }
                } else {
                    div { class: "grid grid-3",
                        for house in houses {
                            ShojiCard { key: "{house.name}",
                                h3 { class: "card-title", "{house.name}" }
                                p { class: "muted small", "📍 {house.location}" }
                                p { class: "muted", "{house.description}" }
                                ul { class: "tag-list",
                                    for specialty in house.specialties.iter() {
                                        li { class: "tag", "{specialty}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                h2 { class: "section-title", "Auction Features" }
                div { class: "grid grid-2",
                    for (icon, title, description) in FEATURES.iter() {
                        ShojiCard {
                            div { class: "card-row",
                                div { class: "icon-tile", "{icon}" }
                                h3 { class: "card-title", "{title}" }
                            }
                            p { class: "muted small", "{description}" }
                        }
                    }
                }
            }
            BrushAccent { kanji: "探索" }
        }
    }
}
