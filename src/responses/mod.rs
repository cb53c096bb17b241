pub mod cors;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::{html_error_response, ResultResp};

pub use cors::with_cors;
pub use html::{css_response, html_response, html_response_with_status, redirect_see_other};
pub use json::{json_error_response, json_response};
