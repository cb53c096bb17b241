// src/tests/router_tests/form_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, header, post_form, test_app};

#[test]
fn connect_page_renders_empty_form() {
    let app = test_app("connect_get");

    let resp = handle(get("/connect"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Contact Us"));
    assert!(body.contains(r#"action="/connect""#));
    assert!(!body.contains("field-error"));
}

#[test]
fn connect_flags_each_missing_field() {
    let app = test_app("connect_invalid");

    let resp = handle(post_form("/connect", "name=&email=ann%40example.com&message="), &app)
        .expect("Handler failed");
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Message is required"));
    assert!(!body.contains("Email is required"));
    // What was typed is kept.
    assert!(body.contains(r#"value="ann@example.com""#));
}

#[test]
fn connect_accepts_complete_submission() {
    let app = test_app("connect_ok");

    let resp = handle(
        post_form(
            "/connect",
            "name=Ann+Lee&email=ann%40example.com&message=Tell+me+more",
        ),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Thanks for reaching out!"));
    assert!(!body.contains("Ann Lee"));
}

#[test]
fn theme_post_sets_cookie_and_redirects_back() {
    let app = test_app("theme_post");

    let resp = handle(post_form("/theme", "theme=dark&return_to=%2Fhomeowner"), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/homeowner"));
    let cookie = header(&resp, "Set-Cookie").unwrap();
    assert!(cookie.starts_with("theme=dark;"));
    assert!(cookie.contains("Path=/"));
}

#[test]
fn theme_post_ignores_unknown_values_and_foreign_redirects() {
    let app = test_app("theme_post_bad");

    let resp = handle(
        post_form("/theme", "accent=neon&return_to=%2F%2Fevil.example"),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/"));
    assert_eq!(header(&resp, "Set-Cookie"), None);
}
