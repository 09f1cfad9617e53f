use reqwest::Method;
use uuid::Uuid;

use super::models::{Sale, SaleCreate, SaleRequest};
use crate::core::{Connection, Page, Result};
use crate::modules::sdk::{fetch, fetch_without_body};

/// Create a sale as the connected seller
/// POST /shoppingMall/seller/sales
pub async fn create(conn: &Connection, body: &SaleCreate) -> Result<Sale> {
    fetch(conn, Method::POST, "/shoppingMall/seller/sales", body).await
}

/// Get one of the connected seller's sales
/// GET /shoppingMall/seller/sales/{id}
pub async fn at(conn: &Connection, id: Uuid) -> Result<Sale> {
    fetch_without_body(conn, Method::GET, &format!("/shoppingMall/seller/sales/{}", id)).await
}

/// List the connected seller's sales
/// PATCH /shoppingMall/seller/sales
pub async fn index(conn: &Connection, body: &SaleRequest) -> Result<Page<Sale>> {
    fetch(conn, Method::PATCH, "/shoppingMall/seller/sales", body).await
}
