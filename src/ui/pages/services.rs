use dioxus::prelude::*;

use crate::{
    domain::content::SERVICES,
    ui::components::decor::{BrushAccent, PageHero, ShojiCard},
};

#[component]
pub fn ServicesPage() -> Element {
    rsx! {
        PageHero {
            kanji: "サービス",
            title: "Our Services",
            intro: "Comprehensive import services covering every aspect of bringing your dream car from Japan to your doorstep. We handle the complexity so you can enjoy the journey.",
        }

        section { class: "section",
            div { class: "container grid grid-3",
                for service in SERVICES.iter() {
                    ShojiCard {
                        div { class: "icon-tile", "{service.icon}" }
                        span { class: "card-kanji", "{service.subtitle}" }
                        h3 { class: "card-title", "{service.title}" }
                        p { class: "muted", "{service.description}" }
                        ul { class: "check-list",
                            for feature in service.features.iter() {
                                li { span { class: "check", "✓" } "{feature}" }
                            }
                        }
                    }
                }
            }
            BrushAccent { kanji: "専門" }
        }
    }
}
