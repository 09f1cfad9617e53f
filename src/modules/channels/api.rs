use reqwest::Method;
use uuid::Uuid;

use super::models::{Channel, ChannelCreate, ChannelRequest};
use crate::core::{Connection, Page, Result};
use crate::modules::sdk::{fetch, fetch_empty, fetch_without_body};

/// Create a channel
/// POST /shoppingMall/admin/channels
pub async fn create(conn: &Connection, body: &ChannelCreate) -> Result<Channel> {
    fetch(conn, Method::POST, "/shoppingMall/admin/channels", body).await
}

/// Get a channel by id
/// GET /shoppingMall/admin/channels/{id}
pub async fn at(conn: &Connection, id: Uuid) -> Result<Channel> {
    fetch_without_body(conn, Method::GET, &format!("/shoppingMall/admin/channels/{}", id)).await
}

/// List channels
/// PATCH /shoppingMall/admin/channels
pub async fn index(conn: &Connection, body: &ChannelRequest) -> Result<Page<Channel>> {
    fetch(conn, Method::PATCH, "/shoppingMall/admin/channels", body).await
}

/// Delete a channel
/// DELETE /shoppingMall/admin/channels/{id}
pub async fn erase(conn: &Connection, id: Uuid) -> Result<()> {
    fetch_empty(conn, Method::DELETE, &format!("/shoppingMall/admin/channels/{}", id)).await
}
