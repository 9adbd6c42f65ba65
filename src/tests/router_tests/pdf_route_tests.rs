use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::make_ctx;
use astra::Body;
use http::{Method, Request};

#[test]
fn download_without_id_is_a_bad_request() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/download-pdf")
        .body(Body::empty())
        .unwrap();

    match handle(req, &ctx) {
        Err(ServerError::BadRequest(_)) => {}
        other => panic!("expected BadRequest, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn download_with_garbage_id_is_a_bad_request() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/download-pdf?id=abc")
        .body(Body::empty())
        .unwrap();

    match handle(req, &ctx) {
        Err(ServerError::BadRequest(_)) => {}
        other => panic!("expected BadRequest, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn download_surfaces_remote_failure() {
    let ctx = make_ctx();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/download-pdf?id=42")
        .body(Body::empty())
        .unwrap();

    // The item lookup itself fails, so the whole request errors out
    // instead of producing a partial brochure.
    match handle(req, &ctx) {
        Err(ServerError::Remote(_)) => {}
        other => panic!("expected Remote, got {:?}", other.map(|r| r.status())),
    }
}
