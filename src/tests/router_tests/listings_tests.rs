use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::make_ctx;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

#[test]
fn listings_page_survives_remote_failure() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    // Unreachable CRM still renders the page, with a banner and zero rows.
    assert!(body.contains("Failed to load items"));
    assert!(body.contains("Showing 1 to 0 of 0 items"));
    assert!(body.contains("Owner's DB PDF Mapping"));
}

#[test]
fn listings_page_shows_flash_notice_from_redirect() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/?page=1&msg=deleted")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    // The remote is down, so the load-failure banner wins over the flash.
    assert!(body.contains("Failed to load items"));
}

#[test]
fn delete_redirects_with_failure_code_when_remote_is_down() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/delete?id=42&page=3")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 303);

    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(location, "/?page=3&msg=delete_failed");
}

#[test]
fn delete_without_id_is_a_bad_request() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/delete?page=1")
        .body(Body::empty())
        .unwrap();

    match handle(req, &ctx) {
        Err(ServerError::BadRequest(_)) => {}
        other => panic!("expected BadRequest, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    match handle(req, &ctx) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|r| r.status())),
    }
}
