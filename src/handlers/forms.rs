// src/handlers/forms.rs

use crate::domain::contact::{ContactErrors, ContactForm};
use crate::domain::theme::{Accent, ThemeMode, ACCENT_COOKIE, THEME_COOKIE};
use crate::handlers::{page_context, read_form};
use crate::responses::{html_response, html_response_with_status, redirect_see_other, ResultResp};
use crate::templates::pages;
use astra::Request;
use tracing::{debug, info};

const PREFERENCE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

pub fn connect_form(req: &Request) -> ResultResp {
    html_response(pages::connect_page(
        &page_context(req),
        &ContactForm::default(),
        &ContactErrors::default(),
        false,
    ))
}

/// Validates a contact submission. Accepted messages are logged, never stored.
pub fn connect_submit(req: Request) -> ResultResp {
    let ctx = page_context(&req);
    let form = ContactForm::from_pairs(read_form(req)?);

    match form.validate() {
        Ok(()) => {
            info!(
                name = %form.name.trim(),
                email = %form.email.trim(),
                message_len = form.message.len(),
                "contact form submitted"
            );
            html_response(pages::connect_page(
                &ctx,
                &ContactForm::default(),
                &ContactErrors::default(),
                true,
            ))
        }
        Err(errors) => {
            debug!(?errors, "contact form rejected");
            html_response_with_status(422, pages::connect_page(&ctx, &form, &errors, false))
        }
    }
}

/// Stores the theme and/or accent choice in cookies and sends the visitor back.
pub fn set_theme(req: Request) -> ResultResp {
    let mut cookies = Vec::new();
    let mut return_to = String::from("/");

    for (key, value) in read_form(req)? {
        match key.as_str() {
            "theme" => {
                if let Some(mode) = ThemeMode::parse(&value) {
                    cookies.push(preference_cookie(THEME_COOKIE, mode.name()));
                }
            }
            "accent" => {
                if let Some(accent) = Accent::parse(&value) {
                    cookies.push(preference_cookie(ACCENT_COOKIE, accent.name()));
                }
            }
            "return_to" if is_local_path(&value) => return_to = value,
            _ => {}
        }
    }

    redirect_see_other(&return_to, &cookies)
}

fn preference_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; Max-Age={PREFERENCE_MAX_AGE}; SameSite=Lax")
}

// Only same-site paths; `//host` and `/\host` would leave the site.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
