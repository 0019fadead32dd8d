//! Case creation, search, uploads and dashboard figures over HTTP.

mod common;

use axum::http::StatusCode;

use common::{body_text, location, multipart_body, TestApp};

async fn logged_in() -> TestApp {
    let mut app = TestApp::spawn().await;
    app.login("admin", "admin123").await;
    app
}

#[tokio::test]
async fn test_add_case_form_renders() {
    let mut app = logged_in().await;

    let response = app.get("/add_case").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"enctype="multipart/form-data""#));
    assert!(body.contains(r#"name="file""#));
}

#[tokio::test]
async fn test_search_matches_case_number_substring() {
    let mut app = logged_in().await;
    app.add_case("C-100", "Open").await;
    app.add_case("C-200", "Open").await;
    app.add_case("X-1001", "Closed").await;

    let body = body_text(app.get("/view_cases?search=100").await).await;

    assert!(body.contains("C-100"));
    assert!(body.contains("X-1001"));
    assert!(!body.contains("C-200"));
}

#[tokio::test]
async fn test_empty_search_lists_everything() {
    let mut app = logged_in().await;
    app.add_case("C-100", "Open").await;
    app.add_case("C-200", "Closed").await;

    for uri in ["/view_cases", "/view_cases?search="] {
        let body = body_text(app.get(uri).await).await;
        assert!(body.contains("C-100"), "{}", uri);
        assert!(body.contains("C-200"), "{}", uri);
    }
}

#[tokio::test]
async fn test_upload_name_is_sanitized() {
    let mut app = logged_in().await;
    let body = multipart_body(
        &[
            ("case_number", "C-300"),
            ("client_name", "Jane Doe"),
            ("case_type", "Criminal"),
            ("hearing_date", "2024-06-01"),
            ("status", "Open"),
        ],
        Some(("../../etc/passwd", b"evidence")),
    );

    let response = app.post_multipart("/add_case", body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let stored = app.config.upload_dir.join("etc_passwd");
    assert_eq!(std::fs::read(&stored).unwrap(), b"evidence");

    let listing = body_text(app.get("/view_cases").await).await;
    assert!(listing.contains(r#"href="/static/uploads/etc_passwd""#));

    let served = app.get("/static/uploads/etc_passwd").await;
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(body_text(served).await, "evidence");
}

#[tokio::test]
async fn test_multipart_without_file_records_no_document() {
    let mut app = logged_in().await;
    let body = multipart_body(
        &[
            ("case_number", "C-400"),
            ("client_name", "John Roe"),
            ("case_type", "Civil"),
            ("hearing_date", ""),
            ("status", "Closed"),
        ],
        Some(("", b"")),
    );

    let response = app.post_multipart("/add_case", body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let listing = body_text(app.get("/view_cases").await).await;
    assert!(listing.contains("C-400"));
    assert!(!listing.contains("/static/uploads/"));
}

#[tokio::test]
async fn test_missing_case_field_is_bad_request() {
    let mut app = logged_in().await;

    let response = app
        .post_multipart("/add_case", multipart_body(&[("case_number", "C-500")], None))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("client_name is required"));

    let listing = body_text(app.get("/view_cases").await).await;
    assert!(!listing.contains("C-500"));
}

#[tokio::test]
async fn test_add_case_requires_session() {
    let mut app = TestApp::spawn().await;

    let response = app
        .post_form(
            "/add_case",
            "case_number=C-1&client_name=A&case_type=B&hearing_date=C&status=Open",
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_dashboard_on_empty_store() {
    let mut app = logged_in().await;

    let body = body_text(app.get("/dashboard").await).await;

    assert!(body.contains(r#"<td id="total">0</td>"#));
    assert!(body.contains("0% (0.00%)"));
}

#[tokio::test]
async fn test_dashboard_counts_and_prediction() {
    let mut app = logged_in().await;
    for i in 0..5 {
        app.add_case(&format!("O-{}", i), "Open").await;
        app.add_case(&format!("K-{}", i), "Closed").await;
    }

    let body = body_text(app.get("/dashboard").await).await;

    assert!(body.contains(r#"<td id="total">10</td>"#));
    assert!(body.contains(r#"<td id="open">5</td>"#));
    assert!(body.contains(r#"<td id="closed">5</td>"#));
    assert!(body.contains("50% (50.00%)"));
}

#[tokio::test]
async fn test_other_statuses_count_only_in_total() {
    let mut app = logged_in().await;
    app.add_case("C-1", "Closed").await;
    app.add_case("C-2", "Pending").await;
    app.add_case("C-3", "Open").await;

    let body = body_text(app.get("/dashboard").await).await;

    assert!(body.contains(r#"<td id="total">3</td>"#));
    assert!(body.contains(r#"<td id="open">1</td>"#));
    assert!(body.contains(r#"<td id="closed">1</td>"#));
    assert!(body.contains("33% (33.33%)"));
}

#[tokio::test]
async fn test_oversized_upload_is_payload_too_large() {
    let mut app = logged_in().await;
    let attachment = vec![b'x'; app.config.max_upload_bytes + 1024 * 1024];
    let body = multipart_body(
        &[
            ("case_number", "C-900"),
            ("client_name", "Jane Doe"),
            ("case_type", "Civil"),
            ("hearing_date", "2024-06-01"),
            ("status", "Open"),
        ],
        Some(("bundle.pdf", &attachment)),
    );

    let response = app.post_multipart("/add_case", body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    assert!(!app.config.upload_dir.join("bundle.pdf").exists());
    let listing = body_text(app.get("/view_cases").await).await;
    assert!(!listing.contains("C-900"));
}
