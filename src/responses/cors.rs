// responses/cors.rs
use astra::{Request, Response};
use http::HeaderValue;

pub const ALLOWED_METHODS: &str = "GET, HEAD, PUT, PATCH, POST, DELETE";

/// Adds CORS headers when the request's `Origin` is on the allow-list.
/// Requests from other origins get the response untouched.
pub fn with_cors(req: &Request, allowed_origins: &[String], mut resp: Response) -> Response {
    let Some(origin) = req
        .headers()
        .get("Origin")
        .and_then(|v| v.to_str().ok())
    else {
        return resp;
    };

    if !allowed_origins.iter().any(|allowed| allowed == origin) {
        return resp;
    }

    let headers = resp.headers_mut();
    if let Ok(value) = HeaderValue::from_str(origin) {
        headers.insert("Access-Control-Allow-Origin", value);
    }
    headers.insert("Access-Control-Allow-Credentials", HeaderValue::from_static("true"));
    headers.insert("Access-Control-Allow-Methods", HeaderValue::from_static(ALLOWED_METHODS));
    headers.append("Vary", HeaderValue::from_static("Origin"));

    resp
}
