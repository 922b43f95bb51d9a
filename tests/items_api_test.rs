mod common;

use common::{database_app_data, json_body, memory_app_data, test_client};
use item_catalog_backend::app_data::AppData;
use migration::{Migrator, MigratorTrait};
use poem::http::StatusCode;
use serde_json::json;

async fn laptop_scenario(app_data: AppData) {
    let cli = test_client(&app_data);

    // Create with default availability
    let resp = cli
        .post("/items")
        .body_json(&json!({"name": "Laptop", "price": 999.99}))
        .send()
        .await;
    resp.assert_status_is_ok();
    let created = json_body(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Laptop");
    assert_eq!(created["price"], 999.99);
    assert_eq!(created["is_available"], true);
    assert!(created["description"].is_null());
    assert!(created["created_at"].is_string());

    // Full replace
    let resp = cli
        .put("/items/1")
        .body_json(&json!({"name": "Laptop Pro", "price": 1099.99, "is_available": false}))
        .send()
        .await;
    resp.assert_status_is_ok();
    let updated = json_body(resp).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "Laptop Pro");
    assert_eq!(updated["price"], 1099.99);
    assert_eq!(updated["is_available"], false);
    assert!(updated["updated_at"].is_string());

    // Delete returns confirmation and the removed record
    let resp = cli.delete("/items/1").send().await;
    resp.assert_status_is_ok();
    let deleted = json_body(resp).await;
    assert_eq!(deleted["message"], "Item 1 deleted successfully");
    assert_eq!(deleted["deleted_item"]["name"], "Laptop Pro");

    // Gone afterwards
    let resp = cli.get("/items/1").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let error = json_body(resp).await;
    assert_eq!(error["error"], "item_not_found");
    assert_eq!(error["message"], "Item not found");
}

#[tokio::test]
async fn test_laptop_scenario_memory() {
    laptop_scenario(memory_app_data()).await;
}

#[tokio::test]
async fn test_laptop_scenario_database() {
    laptop_scenario(database_app_data().await).await;
}

#[tokio::test]
async fn test_root_and_health() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    let resp = cli.get("/").send().await;
    resp.assert_status_is_ok();
    let body = json_body(resp).await;
    assert!(body["message"].as_str().unwrap().contains("Welcome"));

    let resp = cli.get("/health").send().await;
    resp.assert_status_is_ok();
    let body = json_body(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "item-catalog-test");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_list_returns_items_in_creation_order() {
    let app_data = database_app_data().await;
    let cli = test_client(&app_data);

    for (i, name) in ["alpha", "beta", "gamma", "delta"].iter().enumerate() {
        cli.post("/items")
            .body_json(&json!({"name": name, "price": i as f64}))
            .send()
            .await
            .assert_status_is_ok();
    }

    let resp = cli.get("/items").send().await;
    resp.assert_status_is_ok();
    let items = json_body(resp).await;
    let names: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma", "delta"]);

    let resp = cli.get("/items?skip=1&limit=2").send().await;
    resp.assert_status_is_ok();
    let page = json_body(resp).await;
    let ids: Vec<i64> = page
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);

    let resp = cli.get("/items?skip=50").send().await;
    resp.assert_status_is_ok();
    assert_eq!(json_body(resp).await, json!([]));
}

#[tokio::test]
async fn test_ids_strictly_increase_across_deletes() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    let mut last_id = 0;
    for _ in 0..3 {
        let resp = cli
            .post("/items")
            .body_json(&json!({"name": "Widget", "price": 1.0}))
            .send()
            .await;
        let id = json_body(resp).await["id"].as_i64().unwrap();
        assert!(id > last_id);
        last_id = id;

        cli.delete(format!("/items/{}", id)).send().await.assert_status_is_ok();
    }
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app_data = database_app_data().await;
    let cli = test_client(&app_data);

    cli.post("/items")
        .body_json(&json!({"name": "Mug", "price": 8.5}))
        .send()
        .await
        .assert_status_is_ok();

    cli.delete("/items/1").send().await.assert_status_is_ok();
    cli.delete("/items/1").send().await.assert_status(StatusCode::NOT_FOUND);
    cli.delete("/items/1").send().await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_and_changes_nothing() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    cli.post("/items")
        .body_json(&json!({"name": "Mug", "price": 8.5}))
        .send()
        .await
        .assert_status_is_ok();

    let resp = cli
        .put("/items/77")
        .body_json(&json!({"name": "Ghost", "price": 1.0}))
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);

    assert_eq!(app_data.item_store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_accepts_negative_price_and_description() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    let resp = cli
        .post("/items")
        .body_json(&json!({"name": "Coupon", "description": "Store credit", "price": -5.0}))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = json_body(resp).await;
    assert_eq!(body["price"], -5.0);
    assert_eq!(body["description"], "Store credit");

    let resp = cli.get(format!("/items/{}", body["id"])).send().await;
    resp.assert_status_is_ok();
    assert_eq!(json_body(resp).await["name"], "Coupon");
}

#[tokio::test]
async fn test_invalid_payloads_are_rejected_before_storage() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    let invalid_payloads = [
        json!({"name": "No price"}),
        json!({"price": 10.0}),
        json!({"name": "", "price": 10.0}),
        json!({"name": "Bad price", "price": "ten"}),
        json!({"name": "Bad flag", "price": 1.0, "is_available": "yes"}),
    ];

    for payload in invalid_payloads {
        let resp = cli.post("/items").body_json(&payload).send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["status_code"], 400);
    }

    assert_eq!(app_data.item_store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_update_payload_leaves_item_unchanged() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    cli.post("/items")
        .body_json(&json!({"name": "Lamp", "price": 20.0}))
        .send()
        .await
        .assert_status_is_ok();

    cli.put("/items/1")
        .body_json(&json!({"name": "Lamp"}))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let resp = cli.get("/items/1").send().await;
    let body = json_body(resp).await;
    assert_eq!(body["price"], 20.0);
    assert!(body["updated_at"].is_null());
}

#[tokio::test]
async fn test_non_numeric_id_and_negative_skip_are_bad_requests() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    cli.get("/items/abc").send().await.assert_status(StatusCode::BAD_REQUEST);
    cli.get("/items/3000000000").send().await.assert_status(StatusCode::BAD_REQUEST);
    cli.get("/items?skip=-1").send().await.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_body_is_a_validation_error() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    let resp = cli
        .post("/items")
        .content_type("application/json")
        .body("{not json")
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["status_code"], 400);

    assert_eq!(app_data.item_store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_huge_skip_and_limit_on_database_backend() {
    let app_data = database_app_data().await;
    let cli = test_client(&app_data);

    cli.post("/items")
        .body_json(&json!({"name": "Laptop", "price": 999.99}))
        .send()
        .await
        .assert_status_is_ok();

    let resp = cli.get("/items?limit=18446744073709551615").send().await;
    resp.assert_status_is_ok();
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 1);

    let resp = cli.get("/items?skip=9223372036854775808").send().await;
    resp.assert_status_is_ok();
    assert_eq!(json_body(resp).await, json!([]));
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let app_data = database_app_data().await;
    let cli = test_client(&app_data);

    let db = app_data.db.as_ref().unwrap();
    Migrator::down(db, None).await.unwrap();

    let resp = cli.get("/items").send().await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "An internal error occurred");
    assert_eq!(body["status_code"], 500);

    cli.post("/items")
        .body_json(&json!({"name": "Laptop", "price": 999.99}))
        .send()
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app_data = memory_app_data();
    let cli = test_client(&app_data);

    let resp = cli.get("/openapi.json").send().await;
    resp.assert_status_is_ok();
    let spec = json_body(resp).await;
    assert!(spec["paths"]["/items"].is_object());
    assert!(spec["paths"]["/items/{id}"].is_object());
}
