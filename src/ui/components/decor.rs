//! Shoji-style building blocks shared by every section.

use dioxus::prelude::*;

#[component]
pub fn SectionHeader(kanji: &'static str, title: &'static str, intro: Option<&'static str>) -> Element {
    rsx! {
        div { class: "section-header",
            span { class: "section-kanji", "{kanji}" }
            h2 { class: "section-title", "{title}" }
            BrushDivider {}
            if let Some(intro) = intro {
                p { class: "section-intro", "{intro}" }
            }
        }
    }
}

/// Large heading block at the top of a standalone page.
#[component]
pub fn PageHero(kanji: &'static str, title: &'static str, intro: &'static str) -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container animate-fade-in",
                span { class: "page-hero-kanji", "{kanji}" }
                h1 { class: "page-hero-title", "{title}" }
                BrushDivider {}
                p { class: "page-hero-intro", "{intro}" }
            }
        }
    }
}

#[component]
pub fn BrushDivider() -> Element {
    rsx! {
        div { class: "brush-divider",
            span { class: "brush-line" }
            span { class: "brush-dot" }
            span { class: "brush-line brush-line-rev" }
        }
    }
}

#[component]
pub fn BrushAccent(kanji: &'static str) -> Element {
    rsx! {
        div { class: "brush-accent",
            span { class: "brush-line" }
            span { class: "brush-kanji", "{kanji}" }
            span { class: "brush-line brush-line-rev" }
        }
    }
}

/// Bordered card with the two top corner accents.
#[component]
pub fn ShojiCard(#[props(default)] class: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "shoji-card {class}",
            div { class: "corner corner-tl" }
            div { class: "corner corner-tr" }
            {children}
        }
    }
}
