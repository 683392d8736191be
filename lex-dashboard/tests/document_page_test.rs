mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{spawn_stub_api, TestApp};
use lex_dashboard::config::ClientMode;
use serde_json::json;

#[tokio::test]
async fn mock_document_page_echoes_the_requested_id() {
    let app = TestApp::spawn(ClientMode::Mock).await;

    let response = app
        .client
        .get(format!("{}/documents/42", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body = response.text().await.unwrap();

    assert!(body.contains("Mock_Agreement.pdf"));
    assert!(body.contains("COMPLETED"));
    // The mock record carries clause data; the page renders it.
    assert!(body.contains("Termination Clause"));
    assert!(body.contains("Confidentiality"));
}

#[tokio::test]
async fn remote_document_page_renders_summary_and_clauses() {
    let stub = Router::new().route(
        "/api/documents/:id",
        get(|Path(id): Path<i64>| async move {
            Json(json!({
                "id": id,
                "filename": "Supply_Agreement.pdf",
                "storagePath": "s3://lexdash/Supply_Agreement.pdf",
                "status": "COMPLETED",
                "uploadedAt": "2026-08-05T08:00:00Z",
                "summary": "Supply agreement covering quarterly deliveries.",
                "clauses": [
                    {
                        "kind": "risk",
                        "title": "Liability Cap",
                        "excerpt": "Liability is uncapped for indirect damages.",
                        "note": "Uncapped liability is unusual for supply agreements."
                    }
                ]
            }))
        }),
    );
    let base_url = spawn_stub_api(stub).await;
    let app = TestApp::spawn_remote(base_url).await;

    let response = app
        .client
        .get(format!("{}/documents/7", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body = response.text().await.unwrap();

    assert!(body.contains("Supply_Agreement.pdf"));
    assert!(body.contains("Supply agreement covering quarterly deliveries."));
    assert!(body.contains("Risk: Liability Cap"));
    assert!(body.contains("Uncapped liability is unusual"));
}

#[tokio::test]
async fn document_without_clause_data_renders_the_empty_note() {
    let stub = Router::new().route(
        "/api/documents/:id",
        get(|Path(id): Path<i64>| async move {
            Json(json!({
                "id": id,
                "filename": "Pending_Contract.pdf",
                "storagePath": "",
                "status": "PENDING",
                "uploadedAt": "2026-08-06T08:00:00Z"
            }))
        }),
    );
    let base_url = spawn_stub_api(stub).await;
    let app = TestApp::spawn_remote(base_url).await;

    let body = app
        .client
        .get(format!("{}/documents/3", app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .text()
        .await
        .unwrap();

    assert!(body.contains("No summary available."));
    assert!(body.contains("No clause analysis available yet."));
}

#[tokio::test]
async fn missing_document_renders_not_found() {
    let stub = Router::new().route(
        "/api/documents/:id",
        get(|| async { (StatusCode::NOT_FOUND, "no such document") }),
    );
    let base_url = spawn_stub_api(stub).await;
    let app = TestApp::spawn_remote(base_url).await;

    let response = app
        .client
        .get(format!("{}/documents/9000", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();

    assert!(body.contains("Document not found"));
    assert!(body.contains("9000"));
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = TestApp::spawn(ClientMode::Mock).await;

    let response = app
        .client
        .get(format!("{}/documents/not-a-number", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
