use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{content::FAQ_ITEMS, FaqAccordion},
    ui::components::decor::{BrushAccent, PageHero, ShojiCard},
};

fn item_class(open: bool) -> &'static str {
    if open {
        "faq-item open"
    } else {
        "faq-item"
    }
}

#[component]
pub fn FaqPage() -> Element {
    let mut accordion = use_signal(FaqAccordion::default);

    rsx! {
        PageHero {
            kanji: "よくある質問",
            title: "Frequently Asked Questions",
            intro: "Everything you need to know about importing your dream car from Japan. Can't find the answer you're looking for? Contact us directly.",
        }

        section { class: "section",
            div { class: "container narrow",
                div { class: "faq-list",
                    for (index, item) in FAQ_ITEMS.iter().enumerate() {
                        div { class: item_class(accordion.read().is_open(index)),
                            button {
                                class: "faq-question",
                                aria_expanded: accordion.read().is_open(index),
                                onclick: move |_| accordion.with_mut(|acc| acc.toggle(index)),
                                span { "{item.question}" }
                                span { class: "faq-chevron",
                                    if accordion.read().is_open(index) { "−" } else { "+" }
                                }
                            }
                            if accordion.read().is_open(index) {
                                p { class: "faq-answer muted animate-fade-in", "{item.answer}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container narrow",
                ShojiCard { class: "cta",
                    p { class: "muted lead", "Still have questions? Our team is happy to help." }
                    Link { to: Route::Contact {}, class: "btn btn-primary", "Contact Us" }
                }
            }
            BrushAccent { kanji: "質問" }
        }
    }
}
