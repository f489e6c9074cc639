//! HTTP handlers for the form submission API
//!
//! Provides 6 REST endpoints, a submit/get/list triple per record kind:
//! - POST /api/assessment      — save an onboarding assessment
//! - POST /api/contact         — save a contact form
//! - GET  /api/assessment/:id  — fetch one assessment
//! - GET  /api/contact/:id     — fetch one contact form
//! - GET  /api/assessments     — assessment summaries, most recent first
//! - GET  /api/contacts        — contact summaries, most recent first

use crate::records::store::RecordStore;
use crate::records::types::{FieldMap, RecordKind};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Shared state for record handlers
#[derive(Clone)]
pub struct RecordsState {
    pub store: Arc<RecordStore>,
}

/// Create the records router with all REST endpoints
pub fn records_router(state: RecordsState) -> Router {
    Router::new()
        .route("/api/assessment", post(submit_assessment))
        .route("/api/assessment/:id", get(get_assessment))
        .route("/api/assessments", get(list_assessments))
        .route("/api/contact", post(submit_contact))
        .route("/api/contact/:id", get(get_contact))
        .route("/api/contacts", get(list_contacts))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/assessment
async fn submit_assessment(
    State(state): State<RecordsState>,
    Json(fields): Json<FieldMap>,
) -> impl IntoResponse {
    submit(
        &state,
        RecordKind::Assessment,
        fields,
        "Assessment saved successfully",
        "Failed to save assessment",
    )
    .await
}

/// POST /api/contact
async fn submit_contact(
    State(state): State<RecordsState>,
    Json(fields): Json<FieldMap>,
) -> impl IntoResponse {
    submit(
        &state,
        RecordKind::Contact,
        fields,
        "Contact form submitted successfully",
        "Failed to submit contact form",
    )
    .await
}

async fn submit(
    state: &RecordsState,
    kind: RecordKind,
    fields: FieldMap,
    ok_message: &str,
    err_message: &str,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.store.submit(kind, fields).await {
        Ok(id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "id": id,
                "message": ok_message,
            })),
        ),
        Err(e) => {
            tracing::error!(kind = %kind, "Submission failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "error": err_message,
                })),
            )
        }
    }
}

/// GET /api/assessment/:id
async fn get_assessment(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    get_record(&state, RecordKind::Assessment, &id, "Assessment not found").await
}

/// GET /api/contact/:id
async fn get_contact(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    get_record(&state, RecordKind::Contact, &id, "Contact form not found").await
}

async fn get_record(
    state: &RecordsState,
    kind: RecordKind,
    id: &str,
    not_found_message: &str,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.store.get(kind, id).await {
        Ok(record) => (
            StatusCode::OK,
            Json(serde_json::to_value(record).unwrap_or_default()),
        ),
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": not_found_message})),
        ),
        Err(e) => {
            tracing::error!(kind = %kind, id = %id, "Record read failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to read record"})),
            )
        }
    }
}

/// GET /api/assessments
async fn list_assessments(State(state): State<RecordsState>) -> impl IntoResponse {
    list(&state, RecordKind::Assessment, "assessments").await
}

/// GET /api/contacts
async fn list_contacts(State(state): State<RecordsState>) -> impl IntoResponse {
    list(&state, RecordKind::Contact, "contacts").await
}

async fn list(
    state: &RecordsState,
    kind: RecordKind,
    key: &str,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.store.list_summaries(kind).await {
        Ok(entries) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "count": entries.len(),
                key: entries,
            })),
        ),
        Err(e) => {
            tracing::error!(kind = %kind, "Summary listing failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "error": "Failed to list records",
                })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use tower::ServiceExt;

    async fn test_state(dir: &tempfile::TempDir) -> RecordsState {
        RecordsState {
            store: Arc::new(RecordStore::open(dir.path()).await.unwrap()),
        }
    }

    fn fields(name: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), name.into());
        fields.insert("email".to_string(), "t@example.com".into());
        fields
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;

        let response = submit_assessment(State(state.clone()), Json(fields("Lisa")))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        let id = body["id"].as_str().unwrap().to_string();

        let response = get_assessment(State(state), Path(id.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], id);
        assert_eq!(body["name"], "Lisa");
    }

    #[tokio::test]
    async fn test_get_missing_returns_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;

        let response = get_contact(State(state), Path("contact_0".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Contact form not found");
    }

    #[tokio::test]
    async fn test_list_empty_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;

        let response = list_assessments(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 0);
        assert!(body["assessments"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_after_submissions() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;

        submit_contact(State(state.clone()), Json(fields("Carl"))).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        submit_contact(State(state.clone()), Json(fields("Lenny"))).await;

        let response = list_contacts(State(state)).await.into_response();
        let body = body_json(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["contacts"][0]["name"], "Lenny");
        assert_eq!(body["contacts"][1]["name"], "Carl");
    }

    #[tokio::test]
    async fn test_submit_failure_is_generic_500() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;

        // Replace the kind directory with a plain file so the record write
        // fails underneath the handler
        let kind_dir = dir.path().join("assessments");
        std::fs::remove_dir_all(&kind_dir).unwrap();
        std::fs::write(&kind_dir, "not a directory").unwrap();

        let response = submit_assessment(State(state), Json(fields("Bart")))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to save assessment");
    }

    #[tokio::test]
    async fn test_router_submit_fetch_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_router(test_state(&dir).await);

        // Submit
        let submit_body = serde_json::json!({
            "name": "Milhouse",
            "email": "milhouse@example.com",
            "devices": ["tablet", "smartphone"]
        });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/assessment")
                    .header("content-type", "application/json")
                    .body(Body::from(submit_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let submitted = body_json(response).await;
        let id = submitted["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("assessment_"));

        // Fetch by id through path extraction
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/assessment/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["id"], id);
        assert_eq!(fetched["devices"][1], "smartphone");

        // Listing
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/assessments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let listing = body_json(response).await;
        assert_eq!(listing["count"], 1);
        assert_eq!(listing["assessments"][0]["id"], id);
    }

    #[tokio::test]
    async fn test_router_get_missing_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_router(test_state(&dir).await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/contact/contact_0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_router_rejects_wrong_method() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_router(test_state(&dir).await);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/assessments")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
