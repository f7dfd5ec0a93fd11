use dioxus::prelude::*;
use tracing::warn;

use crate::{app::Route, ui::components::decor::ShojiCard};

#[component]
pub fn NotFoundPage(path: String) -> Element {
    let logged_path = path.clone();
    use_hook(move || warn!(path = %logged_path, "no route matched"));

    rsx! {
        section { class: "section",
            div { class: "container narrow",
                ShojiCard { class: "cta",
                    span { class: "page-hero-kanji", "迷子" }
                    h1 { class: "page-hero-title", "404" }
                    p { class: "muted lead", "Oops! The page {path} could not be found." }
                    Link { to: Route::Home {}, class: "btn btn-primary", "Return to Home" }
                }
            }
        }
    }
}
