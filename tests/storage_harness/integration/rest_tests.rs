//! REST integration test macro for puppy stores.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! a `PuppyService` through full REST round-trips:
//! JSON → HTTP request → handler → PuppyService → HTTP response → JSON.

/// Generate a REST integration test suite for a store.
///
/// `$factory` must produce an `impl PuppyService + 'static` holding no rows.
///
/// # Generated Tests
///
/// ## CRUD
/// - `test_rest_fido_lifecycle`: POST 201, GET 200, DELETE 204, GET 404
/// - `test_rest_list`: GET 200 with every record, in id order
/// - `test_rest_update_partial`: PUT 200, unspecified fields unchanged
/// - `test_rest_update_null_required_fields`: PUT null name/vaccinated keeps both
///
/// ## Error handling
/// - `test_rest_not_found_on_every_id_route`: GET/PUT/DELETE unknown id → 404
/// - `test_rest_non_integer_id`: GET /puppies/abc → 404
/// - `test_rest_update_absent_id_with_invalid_body`: PUT empty name, unknown id → 404
/// - `test_rest_missing_name`: POST without name → 500 + error body
/// - `test_rest_malformed_json`: POST with broken JSON → 500 + error body
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use puppy::core::service::PuppyService;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server() -> TestServer {
                let service: Arc<dyn PuppyService> = Arc::new($factory);
                let router = storage_harness::integration::build_test_router(service);
                TestServer::try_new(router).unwrap()
            }

            fn assert_not_found(body: Value) {
                assert_eq!(body, json!({ "error": "Puppy not found" }));
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_fido_lifecycle() {
                let server = make_server().await;

                let created = server.post("/puppies").json(&json!({ "name": "Fido" })).await;
                created.assert_status(StatusCode::CREATED);
                let body: Value = created.json();
                assert_eq!(body["name"], "Fido");
                assert_eq!(body["vaccinated"], false);
                assert_eq!(body["breed"], Value::Null);
                assert_eq!(body["weight_lbs"], Value::Null);
                assert!(body["arrival_date"].is_string());
                let id = body["id"].as_i64().expect("integer id");

                let fetched = server.get(&format!("/puppies/{}", id)).await;
                fetched.assert_status_ok();
                assert_eq!(fetched.json::<Value>(), body);

                let deleted = server.delete(&format!("/puppies/{}", id)).await;
                deleted.assert_status(StatusCode::NO_CONTENT);
                assert!(deleted.text().is_empty());

                let gone = server.get(&format!("/puppies/{}", id)).await;
                gone.assert_status_not_found();
                assert_not_found(gone.json());
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;

                let empty = server.get("/puppies").await;
                empty.assert_status_ok();
                assert_eq!(empty.json::<Value>(), json!([]));

                server.post("/puppies").json(&json!({ "name": "A" })).await;
                server
                    .post("/puppies")
                    .json(&json!({ "name": "B", "breed": "Pug", "weight_lbs": 8.25 }))
                    .await;

                let listed: Vec<Value> = server.get("/puppies").await.json();
                assert_eq!(listed.len(), 2);
                assert_eq!(listed[0]["name"], "A");
                assert_eq!(listed[1]["name"], "B");
                assert_eq!(listed[1]["breed"], "Pug");
                assert_eq!(listed[1]["weight_lbs"], 8.25);
                assert!(listed[0]["id"].as_i64() < listed[1]["id"].as_i64());
            }

            #[tokio::test]
            async fn test_rest_update_partial() {
                let server = make_server().await;
                let created: Value = server
                    .post("/puppies")
                    .json(&json!({ "name": "Fido", "breed": "Beagle", "vaccinated": true }))
                    .await
                    .json();
                let path = format!("/puppies/{}", created["id"]);

                let updated = server.put(&path).json(&json!({ "weight_lbs": 12.5 })).await;
                updated.assert_status_ok();
                let body: Value = updated.json();
                assert_eq!(body["weight_lbs"], 12.5);
                assert_eq!(body["name"], "Fido");
                assert_eq!(body["breed"], "Beagle");
                assert_eq!(body["vaccinated"], true);
                assert_eq!(body["arrival_date"], created["arrival_date"]);

                let fetched: Value = server.get(&path).await.json();
                assert_eq!(fetched, body);
            }

            #[tokio::test]
            async fn test_rest_update_null_required_fields() {
                let server = make_server().await;
                let created: Value = server
                    .post("/puppies")
                    .json(&json!({ "name": "Fido", "vaccinated": true }))
                    .await
                    .json();
                let path = format!("/puppies/{}", created["id"]);

                let updated = server
                    .put(&path)
                    .json(&json!({ "name": null, "vaccinated": null }))
                    .await;

                updated.assert_status_ok();
                let body: Value = updated.json();
                assert_eq!(body["name"], "Fido");
                assert_eq!(body["vaccinated"], true);
                assert_eq!(server.get(&path).await.json::<Value>(), body);
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_not_found_on_every_id_route() {
                let server = make_server().await;

                let get = server.get("/puppies/4242").await;
                get.assert_status_not_found();
                assert_not_found(get.json());

                let put = server.put("/puppies/4242").json(&json!({ "name": "Ghost" })).await;
                put.assert_status_not_found();
                assert_not_found(put.json());

                let delete = server.delete("/puppies/4242").await;
                delete.assert_status_not_found();
                assert_not_found(delete.json());

                // Nothing was created along the way
                assert_eq!(server.get("/puppies").await.json::<Value>(), json!([]));
            }

            #[tokio::test]
            async fn test_rest_non_integer_id() {
                let server = make_server().await;

                let response = server.get("/puppies/abc").await;

                response.assert_status_not_found();
                assert_not_found(response.json());
            }

            #[tokio::test]
            async fn test_rest_update_absent_id_with_invalid_body() {
                let server = make_server().await;

                let response = server.put("/puppies/4242").json(&json!({ "name": "" })).await;

                response.assert_status_not_found();
                assert_not_found(response.json());
            }

            #[tokio::test]
            async fn test_rest_missing_name() {
                let server = make_server().await;

                let response = server.post("/puppies").json(&json!({ "breed": "Pug" })).await;

                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
                let body: Value = response.json();
                assert!(body["error"].as_str().unwrap().starts_with("Validation failed"));
                assert_eq!(server.get("/puppies").await.json::<Value>(), json!([]));
            }

            #[tokio::test]
            async fn test_rest_malformed_json() {
                let server = make_server().await;

                let response = server
                    .post("/puppies")
                    .content_type("application/json")
                    .bytes("{\"name\": ".into())
                    .await;

                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
                let body: Value = response.json();
                assert!(body["error"].is_string());
            }
        }
    };
}
