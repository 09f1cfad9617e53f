use reqwest::Method;
use uuid::Uuid;

use super::models::{Cart, CartCreate, CartItem, CartItemCreate};
use crate::core::{Connection, Result};
use crate::modules::sdk::{fetch, fetch_without_body};

/// Open a cart for the connected member
/// POST /shoppingMall/member/carts
pub async fn create(conn: &Connection, body: &CartCreate) -> Result<Cart> {
    fetch(conn, Method::POST, "/shoppingMall/member/carts", body).await
}

/// Put a sale unit into a cart
/// POST /shoppingMall/member/carts/{cartId}/items
pub async fn add_item(conn: &Connection, cart_id: Uuid, body: &CartItemCreate) -> Result<CartItem> {
    fetch(
        conn,
        Method::POST,
        &format!("/shoppingMall/member/carts/{}/items", cart_id),
        body,
    )
    .await
}

/// GET /shoppingMall/member/carts/{cartId}/items
pub async fn items(conn: &Connection, cart_id: Uuid) -> Result<Vec<CartItem>> {
    fetch_without_body(
        conn,
        Method::GET,
        &format!("/shoppingMall/member/carts/{}/items", cart_id),
    )
    .await
}
