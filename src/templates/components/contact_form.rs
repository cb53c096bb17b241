use crate::domain::contact::{ContactErrors, ContactForm};
use maud::{html, Markup};

pub fn contact_form(form: &ContactForm, errors: &ContactErrors, submitted: bool) -> Markup {
    html! {
        div class="contact-wrapper" {
            @if submitted {
                p class="notice notice-success" role="status" {
                    "Thanks for reaching out! We\u{2019}ll get back to you soon."
                }
            }

            form method="post" action="/connect" class="contact-form" novalidate {
                (field("name", "Name", "text", &form.name, errors.name))
                (field("email", "Email", "email", &form.email, errors.email))

                div class="field" {
                    label for="message" { "Message" }
                    textarea
                        id="message"
                        name="message"
                        rows="4"
                        aria-describedby=[errors.message.map(|_| "message-error")]
                    { (form.message) }
                    @if let Some(msg) = errors.message {
                        p id="message-error" class="field-error" { (msg) }
                    }
                }

                button type="submit" class="btn btn-primary btn-block" { "Send Message" }
            }
        }
    }
}

fn field(name: &str, label: &str, kind: &str, value: &str, error: Option<&str>) -> Markup {
    let error_id = format!("{name}-error");
    html! {
        div class="field" {
            label for=(name) { (label) }
            input
                type=(kind)
                id=(name)
                name=(name)
                value=(value)
                aria-describedby=[error.map(|_| error_id.as_str())];
            @if let Some(msg) = error {
                p id=(error_id) class="field-error" { (msg) }
            }
        }
    }
}
