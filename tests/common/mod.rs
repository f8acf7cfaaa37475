//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn taco() -> Dish {
    Dish {
        id: "d1".to_string(),
        name: "Taco".to_string(),
        description: "Crunchy shell".to_string(),
        price: 5.into(),
        image_url: "http://img/taco.png".to_string(),
    }
}

pub fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "1 Main St".to_string(),
        mobile_number: "555-0100".to_string(),
        status,
        dishes: vec![
            OrderItem::new(2)
                .with("id", "d1")
                .with("name", "Taco")
                .with("description", "Crunchy shell")
                .with("price", 5)
                .with("image_url", "http://img/taco.png"),
        ],
    }
}

/// One dish, plus one order in every status (ids: "42", "prep", "ofd", "done")
pub fn seed() -> SeedData {
    SeedData {
        dishes: vec![taco()],
        orders: vec![
            order("42", OrderStatus::Pending),
            order("prep", OrderStatus::Preparing),
            order("ofd", OrderStatus::OutForDelivery),
            order("done", OrderStatus::Delivered),
        ],
    }
}

/// Server over `seed()` with predictable ids ("1", "2", ...)
pub fn server() -> TestServer {
    server_with(seed())
}

pub fn server_with(seed: SeedData) -> TestServer {
    let app = ServerBuilder::from_seed_with_ids(seed, Arc::new(SequentialIdGenerator::new()))
        .build();
    TestServer::new(app)
}

pub fn dish_payload() -> Value {
    json!({
        "name": "Burrito",
        "description": "Rice and beans",
        "price": 8,
        "image_url": "http://img/burrito.png"
    })
}

pub fn order_payload() -> Value {
    json!({
        "deliverTo": "221B Baker St",
        "mobileNumber": "555-0199",
        "dishes": [{"id": "d1", "name": "Taco", "price": 5, "quantity": 3}]
    })
}

pub async fn count(server: &TestServer, path: &str) -> usize {
    let body: Value = server.get(path).await.json();
    body["data"].as_array().map(Vec::len).unwrap_or_default()
}

pub fn assert_error(body: &Value, message: &str, code: &str) {
    assert_eq!(body["error"], message, "unexpected error body: {body}");
    assert_eq!(body["code"], code, "unexpected error body: {body}");
}
