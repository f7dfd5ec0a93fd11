//! Transient notices stacked in the bottom-right corner.

use std::time::Duration;

use dioxus::prelude::*;

use crate::util::{generate_id, timer::sleep};

const LIFETIME: Duration = Duration::from_secs(6);
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "⚠",
        }
    }

    /// Errors interrupt screen readers; everything else waits its turn.
    fn aria_role(self) -> &'static str {
        match self {
            ToastKind::Error => "alert",
            ToastKind::Success => "status",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Shows a notice. Once five are on screen the oldest one makes room.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let toast = ToastMessage::new(kind, message);
    toasts.with_mut(|queue| enqueue(queue, toast));
}

fn enqueue(queue: &mut Vec<ToastMessage>, toast: ToastMessage) {
    let overflow = (queue.len() + 1).saturating_sub(MAX_VISIBLE);
    queue.drain(..overflow);
    queue.push(toast);
}

fn dismiss(queue: &mut Vec<ToastMessage>, id: &str) {
    queue.retain(|toast| toast.id != id);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let visible = toasts();

    rsx! {
        section { class: "toast-stack", aria_live: "polite",
            ul {
                for toast in visible {
                    ToastCard { key: "{toast.id}", toast: toast.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(toast: ToastMessage) -> Element {
    let mut toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let expiring = toast.id.clone();
    use_future(move || {
        let id = expiring.clone();
        async move {
            sleep(LIFETIME).await;
            toasts.with_mut(|queue| dismiss(queue, &id));
        }
    });

    let id = toast.id.clone();
    rsx! {
        li { class: toast.kind.class(), role: toast.kind.aria_role(),
            span { class: "toast-icon", "{toast.kind.icon()}" }
            p { class: "toast-text", "{toast.text}" }
            button {
                class: "toast-dismiss",
                aria_label: "Dismiss notification",
                onclick: move |_| toasts.with_mut(|queue| dismiss(queue, &id)),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(queue: &[ToastMessage]) -> Vec<&str> {
        queue.iter().map(|toast| toast.text.as_str()).collect()
    }

    #[test]
    fn queue_drops_oldest_beyond_limit() {
        let mut queue = Vec::new();
        for n in 0..7 {
            enqueue(&mut queue, ToastMessage::new(ToastKind::Success, format!("#{n}")));
        }

        assert_eq!(texts(&queue), vec!["#2", "#3", "#4", "#5", "#6"]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut queue = Vec::new();
        enqueue(&mut queue, ToastMessage::new(ToastKind::Success, "sent"));
        enqueue(&mut queue, ToastMessage::new(ToastKind::Error, "failed"));
        let first = queue[0].id.clone();

        dismiss(&mut queue, &first);
        dismiss(&mut queue, "toast-unknown");

        assert_eq!(texts(&queue), vec!["failed"]);
    }

    #[test]
    fn only_errors_are_announced_as_alerts() {
        assert_eq!(ToastKind::Error.aria_role(), "alert");
        assert_eq!(ToastKind::Success.aria_role(), "status");
    }
}
