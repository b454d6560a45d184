//! End-to-end cart flow through the HTTP surface.
//!
//! Drives the full router (session layer included) with `oneshot` requests,
//! forwarding the session cookie between calls the way a browser would.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use magnolia_storefront::catalog::Catalog;
use magnolia_storefront::config::StorefrontConfig;
use magnolia_storefront::state::AppState;

fn test_app() -> Router {
    let config = StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        tax_rate: "0.0725".parse().unwrap(),
        restaurant_name: "Magnolia Soul Kitchen".to_owned(),
    };
    magnolia_storefront::app(AppState::new(config, Catalog::soul_food_menu()))
}

/// A one-request client that carries the session cookie across calls.
struct Client {
    app: Router,
    cookie: Option<String>,
}

impl Client {
    fn new() -> Self {
        Self {
            app: test_app(),
            cookie: None,
        }
    }

    async fn send(&mut self, method: &str, uri: &str, form: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let cookie = set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap()
                .to_owned();
            self.cookie = Some(cookie);
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, json)
    }

    async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    async fn post(&mut self, uri: &str, form: &str) -> (StatusCode, Value) {
        self.send("POST", uri, Some(form)).await
    }
}

#[tokio::test]
async fn add_update_remove_flow_prices_the_cart() {
    let mut client = Client::new();

    // Rib Dinner ($19.00) once, Mac & Cheese ($4.50) twice
    let (status, _) = client.post("/cart/add", "item_id=rib-dinner").await;
    assert_eq!(status, StatusCode::OK);
    client.post("/cart/add", "item_id=mac-and-cheese").await;
    let (status, cart) = client.post("/cart/add", "item_id=mac-and-cheese").await;
    assert_eq!(status, StatusCode::OK);

    // Two lines, the second holding quantity 2
    let lines = cart["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["quantity"], 2);
    assert_eq!(cart["item_count"], 3);
    assert_eq!(cart["subtotal"], "$28.00");
    assert_eq!(cart["tax"], "$2.03");
    assert_eq!(cart["total"], "$30.03");

    // The cart survives a fresh request on the same session
    let (_, cart) = client.get("/cart").await;
    assert_eq!(cart["item_count"], 3);

    // Absolute quantity update
    let line_id = cart["lines"][0]["id"].as_str().unwrap().to_owned();
    let (_, cart) = client
        .post("/cart/update", &format!("line_id={line_id}&quantity=3"))
        .await;
    assert_eq!(cart["lines"][0]["quantity"], 3);
    assert_eq!(cart["subtotal"], "$66.00");

    // Quantity 0 removes the line
    let (_, cart) = client
        .post("/cart/update", &format!("line_id={line_id}&quantity=0"))
        .await;
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);

    // Removing an unknown line is a silent no-op
    let (status, cart) = client.post("/cart/remove", "line_id=menu:ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn variants_create_separate_lines() {
    let mut client = Client::new();

    client.post("/cart/add", "item_id=catfish-dinner").await;
    let (status, cart) = client
        .post("/cart/add", "item_id=catfish-dinner&variant_id=5-piece")
        .await;
    assert_eq!(status, StatusCode::OK);

    let lines = cart["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["variant"], "5 Piece");
    // $18.00 base + $4.00 modifier
    assert_eq!(lines[1]["unit_price"], "$22.00");
}

#[tokio::test]
async fn bad_catalog_references_are_rejected() {
    let mut client = Client::new();

    let (status, _) = client.post("/cart/add", "item_id=lobster-roll").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = client
        .post("/cart/add", "item_id=rib-dinner&variant_id=super-size")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing landed in the cart
    let (_, count) = client.get("/cart/count").await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn checkout_drains_the_cart_into_a_draft() {
    let mut client = Client::new();

    client.post("/cart/add", "item_id=oxtails-dinner").await;
    let (_, cart) = client.get("/cart").await;
    let line_id = cart["lines"][0]["id"].as_str().unwrap().to_owned();
    client
        .post("/cart/update", &format!("line_id={line_id}&quantity=3"))
        .await;

    let (status, draft) = client.post("/checkout", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["subtotal"], "90.00");
    assert_eq!(draft["lines"][0]["quantity"], 3);
    assert!(draft["id"].as_str().is_some());

    // The cart is empty afterwards, and a second checkout has nothing to sell
    let (_, count) = client.get("/cart/count").await;
    assert_eq!(count["count"], 0);
    let (status, _) = client.post("/checkout", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn menu_lists_and_filters_by_category() {
    let mut client = Client::new();

    let (status, all) = client.get("/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!all.as_array().unwrap().is_empty());

    let (status, sides) = client.get("/menu?category=sides").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        sides
            .as_array()
            .unwrap()
            .iter()
            .all(|item| item["category"] == "sides")
    );

    let (status, _) = client.get("/menu?category=brunch").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, rib) = client.get("/menu/rib-dinner").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rib["price"], "$19.00");

    let (status, _) = client.get("/menu/lobster-roll").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
