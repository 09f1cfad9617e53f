use reqwest::Method;
use uuid::Uuid;

use super::models::{Order, OrderCreate, OrderRequest};
use crate::core::{Connection, Page, Result};
use crate::modules::sdk::{fetch, fetch_without_body};

/// Place an order from a cart
/// POST /shoppingMall/member/orders
pub async fn create(conn: &Connection, body: &OrderCreate) -> Result<Order> {
    fetch(conn, Method::POST, "/shoppingMall/member/orders", body).await
}

/// Get one of the connected member's orders
/// GET /shoppingMall/member/orders/{id}
pub async fn at(conn: &Connection, id: Uuid) -> Result<Order> {
    fetch_without_body(conn, Method::GET, &format!("/shoppingMall/member/orders/{}", id)).await
}

/// List the connected member's orders
/// PATCH /shoppingMall/member/orders
pub async fn index(conn: &Connection, body: &OrderRequest) -> Result<Page<Order>> {
    fetch(conn, Method::PATCH, "/shoppingMall/member/orders", body).await
}
