// src/tests/router_tests/page_tests.rs

use crate::content::resolver::FALLBACK_NOTICE;
use crate::content::ContentBlock;
use crate::domain::Persona;
use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, header, test_app};
use scraper::{Html, Selector};

fn count(doc: &Html, selector: &str) -> usize {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

#[test]
fn home_paints_fallback_and_requests_fragment() {
    let app = test_app("home");

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type").as_deref(),
        Some("text/html; charset=utf-8")
    );

    let body = body_string(resp);
    let doc = Html::parse_document(&body);

    assert!(body.contains(&ContentBlock::homepage_default().title));
    assert_eq!(
        count(&doc, r#"section#cms-preview[hx-get="/fragments/cms/homepage"][hx-trigger="load"]"#),
        1
    );
    // Nothing has failed yet, so no notice on first paint.
    assert!(!body.contains(FALLBACK_NOTICE));
}

#[test]
fn every_persona_page_renders_its_own_tables() {
    let app = test_app("landing");

    for persona in Persona::ALL {
        let resp = handle(get(&persona.path()), &app).expect("Handler failed");
        assert_eq!(resp.status(), 200, "{}", persona.slug());

        let body = body_string(resp);
        let doc = Html::parse_document(&body);

        assert!(body.contains(persona.landing().hero_title));
        assert!(body.contains(persona.features()[0].title));
        assert!(body.contains(persona.testimonials()[2].author));
        assert_eq!(count(&doc, ".feature"), 3);
        assert_eq!(count(&doc, "figure.testimonial"), 3);
        assert_eq!(count(&doc, "li.step"), 3);
        assert_eq!(count(&doc, "details.faq-item"), 5);
    }
}

#[test]
fn persona_tables_do_not_leak_across_pages() {
    let app = test_app("landing_leak");

    let body = body_string(handle(get("/homeowner"), &app).expect("Handler failed"));
    assert!(body.contains("Comprehensive Listings"));
    assert!(!body.contains("Risk Assessment Tools"));
    assert!(!body.contains("Client Matching"));
}

#[test]
fn search_demo_defaults_to_map_view() {
    let app = test_app("search_map");

    let body = body_string(handle(get("/homeowner"), &app).expect("Handler failed"));
    let doc = Html::parse_document(&body);

    assert_eq!(count(&doc, ".map-placeholder"), 1);
    assert_eq!(count(&doc, ".property-row"), 0);
    assert_eq!(count(&doc, r#"a[aria-label="Switch to map view"][aria-pressed="true"]"#), 1);
}

#[test]
fn search_demo_list_view_shows_filtered_listings() {
    let app = test_app("search_list");

    let body = body_string(
        handle(get("/real-estate-agent?view=list"), &app).expect("Handler failed"),
    );
    let doc = Html::parse_document(&body);

    // Every demo listing is at or above the 300k demo floor.
    assert_eq!(count(&doc, ".property-row"), 5);
    assert!(body.contains("$350,000"));
    assert!(body.contains("$194.44/sqft"));
    assert!(body.contains("3 beds • 2 baths • 1800 sqft"));
    assert!(body.contains(r#"href="/real-estate-agent?view=map#search-demo""#));
}

#[test]
fn nav_marks_current_page() {
    let app = test_app("nav");

    let body = body_string(handle(get("/mortgage-company"), &app).expect("Handler failed"));
    let doc = Html::parse_document(&body);

    assert_eq!(count(&doc, r#"a[href="/mortgage-company"][aria-current="page"]"#), 1);
    assert_eq!(count(&doc, r#"a[aria-current="page"]"#), 1);
}

#[test]
fn theme_cookies_reach_the_layout() {
    let app = test_app("theme_cookie");

    let mut req = get("/");
    req.headers_mut()
        .insert("Cookie", "theme=dark; accent=green".parse().unwrap());

    let body = body_string(handle(req, &app).expect("Handler failed"));
    let doc = Html::parse_document(&body);

    assert_eq!(count(&doc, "html.theme-dark"), 1);
    assert!(body.contains("--primary: 142.1 76.2% 36.3%"));
}

#[test]
fn serves_stylesheet() {
    let app = test_app("css");

    let resp = handle(get("/static/main.css"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type").as_deref(), Some("text/css; charset=utf-8"));
    assert!(body_string(resp).contains("--primary"));
}

#[test]
fn unknown_paths_are_not_found() {
    let app = test_app("not_found");

    for path in ["/investor", "/homeowner/extra", "/dashboard"] {
        match handle(get(path), &app) {
            Err(ServerError::NotFound) => {}
            Ok(resp) => panic!("expected NotFound for {path}, got status {}", resp.status()),
            Err(other) => panic!("expected NotFound for {path}, got: {:?}", other),
        }
    }
}

#[test]
fn worker_entry_renders_errors_as_pages() {
    let app = test_app("respond_404");

    let resp = respond(get("/no-such-page"), &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Not Found"));

    let ok = respond(get("/"), &app);
    assert_eq!(ok.status(), 200);
}
