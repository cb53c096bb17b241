// src/handlers/api.rs

use crate::app::App;
use crate::content::{ContentBlock, HOMEPAGE_SHORT_DESCRIPTION};
use crate::db::cms::{find_page_content, HOMEPAGE};
use crate::domain::pagination::{paginate, PageRequest};
use crate::domain::property::listing_catalog;
use crate::errors::ServerError;
use crate::handlers::parse_query;
use crate::responses::{json_error_response, json_response, with_cors, ResultResp};
use astra::{Body, Request, ResponseBuilder};
use serde_json::json;
use tracing::error;

/// Editable homepage copy. A missing row is not an error; a failing store is.
pub fn cms_homepage(app: &App) -> ResultResp {
    match app.db.with_conn(|conn| find_page_content(conn, HOMEPAGE)) {
        Ok(Some(block)) => json_response(200, &block),
        Ok(None) => json_response(200, &ContentBlock::homepage_default()),
        Err(e) => {
            error!(error = %e, "error fetching homepage content");
            let fallback = ContentBlock::homepage_default();
            json_response(
                500,
                &json!({
                    "error": "Error fetching homepage content",
                    "title": fallback.title,
                    "description": HOMEPAGE_SHORT_DESCRIPTION,
                }),
            )
        }
    }
}

pub fn properties(req: &Request, app: &App) -> ResultResp {
    let params = parse_query(req);

    let resp = match PageRequest::from_query(&params) {
        Ok(page_req) => json_response(200, &paginate(&listing_catalog(), page_req))?,
        Err(ServerError::BadRequest(msg)) => json_error_response(400, &msg)?,
        Err(e) => {
            error!(error = %e, "error fetching properties");
            json_error_response(500, "Internal Server Error")?
        }
    };

    Ok(with_cors(req, &app.config.allowed_origins, resp))
}

pub fn properties_preflight(req: &Request, app: &App) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)?;

    Ok(with_cors(req, &app.config.allowed_origins, resp))
}
