use dioxus::prelude::*;

#[component]
pub fn StatCard(value: String, label: String, description: Option<String>) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-value", "{value}" }
            h3 { class: "stat-label", "{label}" }
            if let Some(desc) = description {
                p { class: "stat-description", "{desc}" }
            }
        }
    }
}
