//! API integration tests
//!
//! These run against a live server with seeded data: an author
//! ("O'Brien", "Anne") and a genre ("Sci-Fi") must exist.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_book_statuses_is_an_array() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/status", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let entries = body.as_array().expect("Expected a JSON array");
    for entry in entries {
        assert!(entry["title"].is_string());
        assert!(entry["status"].is_string());
        // Escaped fields never carry raw markup
        assert!(!entry["title"].as_str().unwrap().contains('<'));
    }
}

#[tokio::test]
#[ignore]
async fn test_create_book_escapes_response_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "familyName": "O'Brien",
            "firstName": "Anne",
            "genreName": "Sci-Fi",
            "bookTitle": "<b>Dune</b>"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "&lt;b&gt;Dune&lt;/b&gt;");
    assert_eq!(body["author"], "Anne O&#39;Brien");
    assert_eq!(body["genre"], "Sci-Fi");
}

#[tokio::test]
#[ignore]
async fn test_create_book_accepts_urlencoded_bodies() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .form(&[
            ("familyName", "O'Brien"),
            ("firstName", "Anne"),
            ("genreName", "Sci-Fi"),
            ("bookTitle", "The Left Hand of Darkness"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "The Left Hand of Darkness");
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_field_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "familyName": "O'Brien",
            "firstName": "Anne",
            "genreName": "Sci-Fi"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_book_blank_title_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "familyName": "O'Brien",
            "firstName": "Anne",
            "genreName": "Sci-Fi",
            "bookTitle": "   "
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
#[ignore]
async fn test_create_book_unknown_author_is_not_found() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "familyName": "Nobody",
            "firstName": "Known",
            "genreName": "Sci-Fi",
            "bookTitle": "<i>Ghost</i> Book"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "Error creating book: &lt;i&gt;Ghost&lt;/i&gt; Book");
}
