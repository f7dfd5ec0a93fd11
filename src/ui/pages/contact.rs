use dioxus::prelude::*;
use tracing::{debug, info};

use crate::{
    domain::{ContactForm, ContactSubject},
    ui::components::{
        decor::{BrushAccent, PageHero, ShojiCard},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::version::{BUSINESS_HOURS, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_HREF, OFFICES},
};

const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

#[component]
pub fn ContactPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut form = use_signal(ContactForm::default);
    let current = form();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.with(ContactForm::validate) {
            Ok(submission) => {
                info!(
                    subject = submission.subject.key(),
                    has_phone = submission.phone.is_some(),
                    "contact message received"
                );
                debug!(?submission, "contact submission");
                form.set(ContactForm::default());
                push_toast(toasts, ToastKind::Success, THANK_YOU);
            }
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let selected_subject = current.subject.map(|s| s.key()).unwrap_or_default();

    rsx! {
        PageHero {
            kanji: "お問い合わせ",
            title: "Contact Us",
            intro: "Have questions? Ready to start your import journey? Get in touch with our team. We're here to help.",
        }

        section { class: "section",
            div { class: "container grid grid-2",
                ShojiCard {
                    h2 { class: "card-heading", "Send Us a Message" }
                    form { class: "contact-form", onsubmit: on_submit,
                        label { class: "field-label", r#for: "contact-name", "Name *" }
                        input {
                            id: "contact-name",
                            required: true,
                            class: "field-input",
                            placeholder: "Your name",
                            value: "{current.name}",
                            oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                        }

                        label { class: "field-label", r#for: "contact-email", "Email *" }
                        input {
                            id: "contact-email",
                            required: true,
                            class: "field-input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{current.email}",
                            oninput: move |evt| form.with_mut(|f| f.email = evt.value()),
                        }

                        label { class: "field-label", r#for: "contact-phone", "Phone" }
                        input {
                            id: "contact-phone",
                            class: "field-input",
                            r#type: "tel",
                            placeholder: "+1 (234) 567-8900",
                            value: "{current.phone}",
                            oninput: move |evt| form.with_mut(|f| f.phone = evt.value()),
                        }

                        label { class: "field-label", r#for: "contact-subject", "Subject *" }
                        select {
                            id: "contact-subject",
                            required: true,
                            class: "field-input",
                            onchange: move |evt| form.with_mut(|f| f.subject = ContactSubject::from_key(&evt.value())),
                            option { value: "", selected: selected_subject.is_empty(), "Select a subject" }
                            for subject in ContactSubject::ALL {
                                option {
                                    value: subject.key(),
                                    selected: subject.key() == selected_subject,
                                    "{subject.label()}"
                                }
                            }
                        }

                        label { class: "field-label", r#for: "contact-message", "Message *" }
                        textarea {
                            id: "contact-message",
                            required: true,
                            class: "field-input",
                            rows: "6",
                            placeholder: "Tell us about the vehicle you're looking for...",
                            value: "{current.message}",
                            oninput: move |evt| form.with_mut(|f| f.message = evt.value()),
                        }

                        button { class: "btn btn-primary btn-block", r#type: "submit", "Send Message" }
                    }
                }

                ShojiCard {
                    h2 { class: "card-heading", "Get In Touch" }
                    ul { class: "contact-list",
                        li {
                            h3 { class: "card-title", "Email" }
                            a { class: "footer-link", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                        }
                        li {
                            h3 { class: "card-title", "Phone" }
                            a { class: "footer-link", href: "{CONTACT_PHONE_HREF}", "{CONTACT_PHONE_DISPLAY}" }
                        }
                        li {
                            h3 { class: "card-title", "Office" }
                            for office in OFFICES.iter() {
                                p { class: "muted", "{office}" }
                            }
                        }
                        li {
                            h3 { class: "card-title", "Business Hours" }
                            for (days, hours) in BUSINESS_HOURS.iter() {
                                p { class: "muted", "{days}: {hours}" }
                            }
                        }
                    }
                }
            }
            BrushAccent { kanji: "連絡" }
        }
    }
}
