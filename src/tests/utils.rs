use crate::app::App;
use crate::config::AppConfig;
use crate::content::{ContentBlock, ContentError, ContentSource};
use crate::db::connection::init_db;
use crate::db::Database;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// A unique SQLite path under the temp dir, so parallel tests never share a file.
pub fn temp_db_path(label: &str) -> String {
    std::env::temp_dir()
        .join(format!(
            "mortru_{label}_{}.sqlite",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
        .to_string_lossy()
        .into_owned()
}

/// App over a fresh schema-initialized DB, with the given homepage content source.
pub fn test_app_with_source(label: &str, source: impl ContentSource + 'static) -> App {
    let db_path = temp_db_path(label);
    let config = AppConfig::from_lookup(|key| match key {
        "MORTRU_DB_PATH" => Some(db_path.clone()),
        _ => None,
    })
    .expect("default config is valid");

    let app = App::new(config).with_cms_source(source);
    init_db(&app.db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    app
}

/// App wired exactly as `main` does with no `MORTRU_CMS_URL`, on a single worker.
pub fn local_cms_app(label: &str) -> App {
    let db_path = temp_db_path(label);
    let config = AppConfig::from_lookup(|key| match key {
        "MORTRU_DB_PATH" => Some(db_path.clone()),
        "MORTRU_MAX_WORKERS" => Some("1".to_string()),
        _ => None,
    })
    .expect("default config is valid");

    let app = App::new(config);
    init_db(&app.db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    app
}

pub fn test_app(label: &str) -> App {
    test_app_with_source(label, || -> Result<ContentBlock, ContentError> {
        Ok(ContentBlock::new("Remote title", "Remote description"))
    })
}

/// A database file that exists but never had the schema applied.
pub fn uninitialized_db(label: &str) -> Database {
    Database::new(temp_db_path(label))
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri, Body::empty())
}

pub fn post_form(uri: &str, form: &str) -> Request {
    let mut req = request(Method::POST, uri, Body::from(form.to_string()));
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn request(method: Method, uri: &str, body: Body) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
