use dioxus::prelude::*;

use crate::{
    domain::content::{STATS, TESTIMONIALS},
    ui::components::{
        decor::{BrushAccent, PageHero, ShojiCard},
        stat_card::StatCard,
    },
};

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

#[component]
pub fn TestimonialsPage() -> Element {
    rsx! {
        PageHero {
            kanji: "お客様の声",
            title: "Client Testimonials",
            intro: "Real stories from real clients. See what our customers have to say about their import experience with JapWorld.",
        }

        section { class: "section",
            div { class: "container grid grid-4",
                for stat in STATS.iter() {
                    StatCard { value: stat.value.to_string(), label: stat.label.to_string() }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container grid grid-2",
                for testimonial in TESTIMONIALS.iter() {
                    ShojiCard {
                        p { class: "stars", aria_label: "{testimonial.rating} out of 5", "{stars(testimonial.rating)}" }
                        blockquote { class: "muted quote", "“{testimonial.quote}”" }
                        div { class: "quote-author",
                            p { class: "card-title", "{testimonial.author}" }
                            p { class: "muted small", "{testimonial.location} · {testimonial.vehicle}" }
                        }
                    }
                }
            }
            BrushAccent { kanji: "信頼" }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars(9), "★★★★★");
    }
}
