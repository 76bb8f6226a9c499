use docserve::http::mime;
use docserve::http::response::{Body, Response, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_mime_from_file_name() {
    assert_eq!(mime::from_file_name("index.html"), "text/html");
    assert_eq!(mime::from_file_name("notes.txt"), "text/plain");
    assert_eq!(mime::from_file_name("logo.png"), "image/png");
    assert_eq!(mime::from_file_name("photo.jpg"), "image/jpeg");
    assert_eq!(mime::from_file_name("archive.tar.css"), "text/css");
}

#[test]
fn test_mime_falls_back_to_octet_stream() {
    assert_eq!(mime::from_file_name("archive.bin"), "application/octet-stream");
    assert_eq!(mime::from_file_name("README"), "application/octet-stream");
    assert_eq!(mime::from_file_name("trailing."), "application/octet-stream");
    // Extensions are case-sensitive
    assert_eq!(mime::from_file_name("INDEX.HTML"), "application/octet-stream");
}

#[test]
fn test_response_defaults() {
    let response = Response::default();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.mime_type, "text/html");
    assert_eq!(response.body_length, None);
    assert!(matches!(response.body, Body::Empty));
}

#[test]
fn test_set_text_body() {
    let mut response = Response::new(StatusCode::NotFound);
    response.set_text_body("gone");

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.mime_type, "text/plain");
    assert_eq!(response.body_length, Some(4));
}

#[test]
fn test_text_body_length_counts_bytes() {
    let mut response = Response::default();
    response.set_text_body("grüße");

    assert_eq!(response.body_length, Some(7));
}

#[test]
fn test_setting_body_replaces_previous() {
    let mut response = Response::default();
    response.set_text_body("first body");
    response.set_bytes_body(vec![1u8, 2]);

    assert_eq!(response.body_length, Some(2));
    assert_eq!(response.mime_type, "application/octet-stream");
    match response.body {
        Body::Bytes(bytes) => assert_eq!(&bytes[..], &[1u8, 2]),
        other => panic!("unexpected body {:?}", other),
    }
}
