use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use shopcart_api::app::{build_app, services::AppServices};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, fresh in-memory state, ephemeral port.
        let app = build_app(Arc::new(AppServices::in_memory()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v1", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn add_item(&self, sku: &str, price: f64) {
        let res = self
            .client
            .post(self.url("/items"))
            .json(&json!({ "sku": sku, "displayName": format!("Item {sku}"), "price": price }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    async fn add_to_cart(&self, sku: &str, quantity: i64) -> reqwest::Response {
        self.client
            .post(self.url("/carts/add"))
            .json(&json!({ "sku": sku, "quantity": quantity }))
            .send()
            .await
            .unwrap()
    }

    async fn total(&self, discount_code: Option<&str>) -> reqwest::Response {
        let url = match discount_code {
            Some(code) => self.url(&format!("/carts/total?discountCode={code}")),
            None => self.url("/carts/total"),
        };
        self.client.get(url).send().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn error_message(res: reqwest::Response) -> String {
    let body: Value = res.json().await.unwrap();
    body["message"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_outside_api_prefix() {
    let srv = TestServer::spawn().await;
    let root = srv.base_url.trim_end_matches("/api/v1");
    let res = srv.client.get(format!("{root}/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn item_crud_lifecycle() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .post(srv.url("/items"))
        .json(&json!({ "sku": "SKU001", "displayName": "Basket Ball", "price": 10.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item added successfully");

    let res = srv.client.get(srv.url("/items/SKU001")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let item: Value = res.json().await.unwrap();
    assert_eq!(item, json!({ "sku": "SKU001", "displayName": "Basket Ball", "price": 10.0 }));

    let res = srv
        .client
        .put(srv.url("/items/SKU001"))
        .json(&json!({ "sku": "SKU001", "displayName": "Foot Ball", "price": 12.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item updated successfully");

    let item: Value = srv
        .client
        .get(srv.url("/items/SKU001"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(item["displayName"], "Foot Ball");
    assert_eq!(item["price"], 12.5);

    let res = srv.client.delete(srv.url("/items/SKU001")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item deleted successfully");

    let res = srv.client.get(srv.url("/items/SKU001")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(res).await, "Item with SKU SKU001 not found");
}

#[tokio::test]
async fn add_alias_route_and_duplicate_rejection() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .post(srv.url("/items/add"))
        .json(&json!({ "sku": "SKU1", "displayName": "Ball", "price": 10.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = srv
        .client
        .post(srv.url("/items"))
        .json(&json!({ "sku": "SKU1", "displayName": "Other", "price": 3.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "item_already_exists");
    assert_eq!(body["message"], "Item with SKU SKU1 is already added");
}

#[tokio::test]
async fn item_with_sku_add_is_reachable_by_sku() {
    let srv = TestServer::spawn().await;
    srv.add_item("add", 4.0).await;

    let res = srv.client.get(srv.url("/items/add")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let item: Value = res.json().await.unwrap();
    assert_eq!(item["sku"], "add");

    let res = srv
        .client
        .put(srv.url("/items/add"))
        .json(&json!({ "sku": "add", "displayName": "Renamed", "price": 5.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = srv.client.delete(srv.url("/items/add")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = srv.client.get(srv.url("/items/add")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(res).await, "Item with SKU add not found");
}

#[tokio::test]
async fn post_on_other_sku_path_is_json_405() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .post(srv.url("/items/SKU1"))
        .json(&json!({ "sku": "SKU1", "displayName": "Ball", "price": 10.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "method_not_allowed");

    let res = srv.client.get(srv.url("/items/SKU1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn item_field_validation_messages() {
    let srv = TestServer::spawn().await;

    for (payload, expected) in [
        (
            json!({ "sku": "", "displayName": "Ball", "price": 10.0 }),
            "The sku must not be blank",
        ),
        (
            json!({ "sku": "SKU", "displayName": "", "price": 10.0 }),
            "The displayName must not be blank",
        ),
        (
            json!({ "sku": "SKU", "displayName": "Ball", "price": 0.0 }),
            "The price must be positive",
        ),
    ] {
        let res = srv.client.post(srv.url("/items")).json(&payload).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(res).await, expected);
    }

    let res = srv
        .client
        .post(srv.url("/items"))
        .header("content-type", "application/json")
        .body("{\"sku\": 1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_mismatched_sku_is_rejected() {
    let srv = TestServer::spawn().await;
    srv.add_item("SKU1", 10.0).await;

    let res = srv
        .client
        .put(srv.url("/items/SKU1"))
        .json(&json!({ "sku": "SKU2", "displayName": "Ball", "price": 10.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(res).await,
        "Existing item's SKU SKU1 does not match with the new SKU SKU2"
    );
}

#[tokio::test]
async fn cart_flow_with_discounts() {
    let srv = TestServer::spawn().await;
    srv.add_item("A", 10.0).await;
    srv.add_item("B", 20.0).await;

    let res = srv.add_to_cart("A", 2).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item added to cart");
    assert_eq!(srv.add_to_cart("B", 1).await.status(), StatusCode::OK);

    let total: f64 = srv.total(None).await.json().await.unwrap();
    assert!((total - 40.0).abs() < 1e-9);

    let total: f64 = srv.total(Some("DISCOUNT10")).await.json().await.unwrap();
    assert!((total - 36.0).abs() < 1e-9);

    let res = srv.total(Some("NOPE")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(res).await, "The NOPE is invalid");

    let lines: Value = srv
        .client
        .get(srv.url("/carts/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        lines,
        json!([
            { "item": { "sku": "A", "displayName": "Item A", "price": 10.0 }, "quantity": 2 },
            { "item": { "sku": "B", "displayName": "Item B", "price": 20.0 }, "quantity": 1 },
        ])
    );
}

#[tokio::test]
async fn cart_rule_violations() {
    let srv = TestServer::spawn().await;
    srv.add_item("SKU1", 10.0).await;

    let res = srv.add_to_cart("MISSING", 1).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(res).await, "Item with SKU MISSING not found");

    assert_eq!(srv.add_to_cart("SKU1", 2).await.status(), StatusCode::OK);
    let res = srv.add_to_cart("SKU1", 5).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(res).await, "The item is already exist");

    let res = srv.add_to_cart("SKU1", 0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(res).await, "The quantity must be positive");

    let res = srv.add_to_cart("SKU1", 1001).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(res).await,
        "The quantity must be equal or less than 1000"
    );

    let total: f64 = srv.total(None).await.json().await.unwrap();
    assert!((total - 20.0).abs() < 1e-9);
    let total: f64 = srv.total(Some("DISCOUNT20")).await.json().await.unwrap();
    assert!((total - 16.0).abs() < 1e-9);
}

#[tokio::test]
async fn update_remove_and_empty() {
    let srv = TestServer::spawn().await;
    srv.add_item("SKU1", 10.0).await;
    srv.add_item("SKU2", 5.0).await;
    assert_eq!(srv.add_to_cart("SKU1", 1).await.status(), StatusCode::OK);

    let res = srv
        .client
        .put(srv.url("/carts/update"))
        .json(&json!({ "sku": "SKU1", "quantity": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item quantity updated");
    let total: f64 = srv.total(None).await.json().await.unwrap();
    assert!((total - 30.0).abs() < 1e-9);

    // Known item, not in cart: accepted without effect.
    let res = srv
        .client
        .put(srv.url("/carts/update"))
        .json(&json!({ "sku": "SKU2", "quantity": 4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let total: f64 = srv.total(None).await.json().await.unwrap();
    assert!((total - 30.0).abs() < 1e-9);

    let res = srv
        .client
        .delete(srv.url("/carts/remove?sku=SKU2"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(res).await, "Item with SKU SKU2 not found in the cart");

    let res = srv
        .client
        .delete(srv.url("/carts/remove?sku=SKU1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item removed from cart");

    let res = srv.client.delete(srv.url("/carts/remove")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = srv.client.post(srv.url("/carts/empty")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(res).await, "The cart is already empty");

    assert_eq!(srv.add_to_cart("SKU2", 2).await.status(), StatusCode::OK);
    let res = srv.client.post(srv.url("/carts/empty")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Cart emptied");

    let lines: Value = srv
        .client
        .get(srv.url("/carts/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(lines, json!([]));
}

#[tokio::test]
async fn deleted_catalog_item_breaks_cart_reads() {
    let srv = TestServer::spawn().await;
    srv.add_item("SKU1", 10.0).await;
    assert_eq!(srv.add_to_cart("SKU1", 1).await.status(), StatusCode::OK);

    let res = srv.client.delete(srv.url("/items/SKU1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = srv.client.get(srv.url("/carts/items")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(res).await, "Item with SKU SKU1 not found");

    let res = srv.total(None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Emptying still works: it never consults the catalog.
    let res = srv.client.post(srv.url("/carts/empty")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
