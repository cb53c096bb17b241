// src/handlers/pages.rs

use crate::app::App;
use crate::content::{resolve, ContentBlock};
use crate::domain::Persona;
use crate::errors::ServerError;
use crate::handlers::{page_context, parse_query};
use crate::responses::{html_response, ResultResp};
use crate::templates::components::SearchView;
use crate::templates::{cms_block, pages};
use astra::Request;

pub fn home(req: &Request) -> ResultResp {
    let ctx = page_context(req);
    html_response(pages::home_page(&ctx, &ContentBlock::homepage_default()))
}

/// The on-load swap for the homepage block: one fetch, fallback on any failure.
pub fn cms_homepage_fragment(app: &App) -> ResultResp {
    let resolution = resolve(ContentBlock::homepage_default(), app.cms_source.as_ref());
    html_response(cms_block(&resolution))
}

pub fn landing(req: &Request, slug: &str) -> ResultResp {
    let persona = Persona::from_slug(slug).ok_or(ServerError::NotFound)?;
    let params = parse_query(req);
    let view = SearchView::parse(params.get("view").map(String::as_str));

    html_response(pages::landing_page(&page_context(req), persona, view))
}
