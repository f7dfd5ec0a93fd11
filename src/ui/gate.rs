//! Password prompt shown before any page renders.

use dioxus::prelude::*;

use crate::{
    domain::{AppState, GateStatus, SubmitOutcome, SHAKE_DURATION},
    util::{persistence::default_storage, timer::sleep},
};

#[component]
pub fn PasswordGate(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();

    // Runs after the first (empty) render so gated content never flashes.
    use_effect(move || {
        let storage = default_storage();
        state.with_mut(|st| {
            st.gate.resolve(storage.as_ref());
        });
    });

    let gate = state.with(|st| st.gate.clone());

    if gate.may_render_content() {
        return rsx! { {children} };
    }
    if gate.status() == GateStatus::Unknown {
        return rsx! {};
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut storage = default_storage();
        let outcome = state.with_mut(|st| st.gate.submit(storage.as_mut()));
        if let SubmitOutcome::Rejected(ticket) = outcome {
            spawn(async move {
                sleep(SHAKE_DURATION).await;
                state.with_mut(|st| st.gate.finish_shake(ticket));
            });
        }
    };

    let panel_class = if gate.is_shaking() {
        "gate-panel animate-shake"
    } else {
        "gate-panel"
    };
    let input_class = if gate.has_error() {
        "gate-input gate-input-error"
    } else {
        "gate-input"
    };

    rsx! {
        div { class: "gate-backdrop animate-fade-in",
            div { class: "gate-corner gate-corner-tl" }
            div { class: "gate-corner gate-corner-tr" }
            div { class: "gate-corner gate-corner-bl" }
            div { class: "gate-corner gate-corner-br" }

            div { class: "{panel_class}",
                div { class: "gate-lock", "🔒" }
                h2 { class: "gate-title", "Private Access" }
                p { class: "gate-subtitle", "Enter password to continue" }

                form { onsubmit: on_submit,
                    input {
                        class: "{input_class}",
                        r#type: "password",
                        placeholder: "Enter password",
                        autofocus: true,
                        value: "{gate.candidate()}",
                        oninput: move |evt| state.with_mut(|st| st.gate.set_candidate(evt.value())),
                    }
                    if gate.has_error() {
                        div { class: "gate-error animate-fade-in",
                            span { "⚠" }
                            span { "Incorrect password" }
                        }
                    }
                    button { class: "btn btn-primary btn-block", r#type: "submit", "Enter" }
                }

                div { class: "brush-accent",
                    span { class: "brush-line" }
                    span { class: "brush-kanji", "門" }
                    span { class: "brush-line brush-line-rev" }
                }
            }
        }
    }
}
