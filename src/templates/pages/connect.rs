use crate::domain::contact::{ContactErrors, ContactForm};
use crate::templates::{components::contact_form, site_layout, PageContext};
use maud::{html, Markup};

pub fn connect_page(
    ctx: &PageContext,
    form: &ContactForm,
    errors: &ContactErrors,
    submitted: bool,
) -> Markup {
    site_layout(
        ctx,
        "Contact Us",
        html! {
            div class="container narrow" {
                h1 { "Contact Us" }
                (contact_form(form, errors, submitted))
            }
        },
    )
}
