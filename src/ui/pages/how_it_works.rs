use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::content::{ProcessStep, PROCESS_STEPS},
    ui::components::decor::{BrushAccent, PageHero, ShojiCard},
};

fn numbered_steps() -> impl Iterator<Item = (String, &'static ProcessStep)> {
    PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| (format!("{:02}", index + 1), step))
}

#[component]
pub fn HowItWorksPage() -> Element {
    rsx! {
        PageHero {
            kanji: "手順",
            title: "How It Works",
            intro: "A seamless journey from discovery to delivery. Here's how we bring your dream car from Japan to your doorstep, step by step.",
        }

        section { class: "section",
            div { class: "container narrow",
                ol { class: "process-list",
                    for (number, step) in numbered_steps() {
                        li { class: "process-step",
                            div { class: "process-number", "{number}" }
                            ShojiCard {
                                div { class: "card-row",
                                    div { class: "icon-tile", "{step.icon}" }
                                    div {
                                        span { class: "card-kanji", "{step.subtitle}" }
                                        h3 { class: "card-title", "{step.title}" }
                                    }
                                }
                                p { class: "muted", "{step.description}" }
                            }
                        }
                    }
                }
            }
            BrushAccent { kanji: "流れ" }
        }

        section { class: "section section-alt",
            div { class: "container narrow",
                ShojiCard { class: "cta",
                    h2 { class: "card-heading", "Ready to Start Your Import Journey?" }
                    p { class: "muted lead",
                        "Our team is ready to guide you through every step. Contact us today to begin your journey to owning your dream car from Japan."
                    }
                    Link { to: Route::Contact {}, class: "btn btn-primary", "Get in Touch →" }
                }
            }
        }
    }
}
