// src/tests/router_tests/cms_fragment_tests.rs

use crate::app::App;
use crate::config::AppConfig;
use crate::content::resolver::FALLBACK_NOTICE;
use crate::content::{decode_response, ContentBlock, ContentError, HttpContentSource};
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, local_cms_app, test_app, test_app_with_source, uninitialized_db,
};
use rusqlite::params;
use std::time::{Duration, Instant};

const FRAGMENT: &str = "/fragments/cms/homepage";

#[test]
fn fragment_swaps_in_remote_content() {
    let app = test_app("fragment_ok");

    let resp = handle(get(FRAGMENT), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Remote title"));
    assert!(body.contains("Remote description"));
    assert!(!body.contains(FALLBACK_NOTICE));
    // The swapped-in block must not trigger another load.
    assert!(!body.contains("hx-get"));
}

#[test]
fn fragment_keeps_fallback_on_server_error() {
    let app = test_app_with_source("fragment_500", || {
        decode_response(
            500,
            r#"{"error":"Error fetching homepage content","title":"t","description":"d"}"#,
        )
    });

    let resp = handle(get(FRAGMENT), &app).expect("Handler failed");
    // Failure is shown inline; the fragment itself still succeeds.
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let fallback = ContentBlock::homepage_default();
    assert!(body.contains(&fallback.title));
    assert!(body.contains(&fallback.description));
    assert!(body.contains(FALLBACK_NOTICE));
}

#[test]
fn fragment_ignores_fields_next_to_an_error() {
    let app = test_app_with_source("fragment_error_field", || {
        decode_response(200, r#"{"error":"boom","title":"x-title","description":"y-desc"}"#)
    });

    let body = body_string(handle(get(FRAGMENT), &app).expect("Handler failed"));

    assert!(!body.contains("x-title"));
    assert!(!body.contains("y-desc"));
    assert!(body.contains(&ContentBlock::homepage_default().title));
    assert!(body.contains(FALLBACK_NOTICE));
}

#[test]
fn fragment_survives_transport_failure() {
    let app = test_app_with_source("fragment_transport", || -> Result<ContentBlock, ContentError> {
        Err(ContentError::Transport("connection refused".to_string()))
    });

    let body = body_string(handle(get(FRAGMENT), &app).expect("Handler failed"));
    assert!(body.contains(FALLBACK_NOTICE));
}

#[test]
fn fragment_survives_unreachable_cms_over_http() {
    let app = test_app("fragment_http")
        .with_cms_source(HttpContentSource::new("http://127.0.0.1:9/api/cms/homepage"));

    let resp = handle(get(FRAGMENT), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(FALLBACK_NOTICE));
}

#[test]
fn default_config_reads_saved_copy_without_a_network_hop() {
    let app = local_cms_app("fragment_local_row");
    assert_eq!(app.config.cms_url, None);
    app.db
        .with_conn(|conn| {
            conn.execute(
                "insert into cms_content (page, title, description) values (?, ?, ?)",
                params!["homepage", "Spring update", "Fresh copy"],
            )
            .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .expect("insert failed");

    let started = Instant::now();
    let body = body_string(handle(get(FRAGMENT), &app).expect("Handler failed"));

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(body.contains("Spring update"));
    assert!(body.contains("Fresh copy"));
    assert!(!body.contains(FALLBACK_NOTICE));
}

#[test]
fn default_config_without_saved_copy_shows_default_cleanly() {
    let app = local_cms_app("fragment_local_empty");

    let body = body_string(handle(get(FRAGMENT), &app).expect("Handler failed"));
    assert!(body.contains(&ContentBlock::homepage_default().title));
    assert!(!body.contains(FALLBACK_NOTICE));
}

#[test]
fn default_config_falls_back_when_store_fails() {
    // Schema never applied, so the lookup itself errors.
    let app = App::new(AppConfig::from_lookup(|key| match key {
        "MORTRU_DB_PATH" => Some(uninitialized_db("fragment_local_broken").path().to_string()),
        _ => None,
    })
    .expect("default config is valid"));

    let resp = handle(get(FRAGMENT), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(&ContentBlock::homepage_default().title));
    assert!(body.contains(FALLBACK_NOTICE));
}
