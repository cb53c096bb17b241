use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{api, forms, pages};
use crate::responses::{css_response, html_error_response, ResultResp};
use crate::templates::components::cms_preview::CMS_FRAGMENT_PATH;
use astra::{Request, Response};
use tracing::info;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Worker entry point: dispatch, turn errors into pages, log the outcome.
pub fn respond(req: Request, app: &App) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    };

    info!(%method, %path, status = resp.status().as_u16(), "request");
    resp
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => pages::home(&req),
        ("GET", CMS_FRAGMENT_PATH) => pages::cms_homepage_fragment(app),

        ("GET", "/connect") => forms::connect_form(&req),
        ("POST", "/connect") => forms::connect_submit(req),
        ("POST", "/theme") => forms::set_theme(req),

        ("GET", "/api/cms/homepage") => api::cms_homepage(app),
        ("GET", "/api/properties") => api::properties(&req, app),
        ("OPTIONS", "/api/properties") => api::properties_preflight(&req, app),

        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        // Persona landing pages: /homeowner, /mortgage-company, /real-estate-agent
        ("GET", p) => pages::landing(&req, p.trim_start_matches('/')),

        _ => Err(ServerError::NotFound),
    }
}
