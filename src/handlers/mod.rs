pub mod api;
pub mod forms;
pub mod pages;

use crate::domain::ThemeSettings;
use crate::errors::ServerError;
use crate::templates::PageContext;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn page_context(req: &Request) -> PageContext {
    let cookies = req.headers().get("Cookie").and_then(|v| v.to_str().ok());
    PageContext {
        path: req.uri().path().to_string(),
        theme: ThemeSettings::from_cookie_header(cookies),
    }
}

pub fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    }
}

/// Reads an `application/x-www-form-urlencoded` body into ordered pairs.
pub fn read_form(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}
