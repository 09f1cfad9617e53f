use reqwest::Method;
use serde::Serialize;

use super::models::{ActorRole, Authorized, Login, RefreshRequest};
use crate::core::Connection;
use crate::core::Result;
use crate::modules::sdk::fetch;

/// Register a new actor of `role`
/// POST /auth/{role}/join
pub async fn join<B>(conn: &Connection, role: ActorRole, body: &B) -> Result<Authorized>
where
    B: Serialize + ?Sized,
{
    fetch(conn, Method::POST, &format!("/auth/{}/join", role), body).await
}

/// Authenticate an existing actor
/// PUT /auth/{role}/login
pub async fn login(conn: &Connection, role: ActorRole, body: &Login) -> Result<Authorized> {
    fetch(conn, Method::PUT, &format!("/auth/{}/login", role), body).await
}

/// Exchange a refresh token for a new token pair
/// PUT /auth/{role}/refresh
pub async fn refresh(
    conn: &Connection,
    role: ActorRole,
    body: &RefreshRequest,
) -> Result<Authorized> {
    fetch(conn, Method::PUT, &format!("/auth/{}/refresh", role), body).await
}
