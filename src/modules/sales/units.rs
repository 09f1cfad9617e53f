use reqwest::Method;
use uuid::Uuid;

use super::models::{SaleUnit, SaleUnitCreate, SaleUnitUpdate};
use crate::core::{Connection, Result};
use crate::modules::sdk::{fetch, fetch_without_body};

fn path(sale_id: Uuid) -> String {
    format!("/shoppingMall/admin/sales/{}/units", sale_id)
}

/// Attach a unit to a sale
/// POST /shoppingMall/admin/sales/{saleId}/units
pub async fn create(conn: &Connection, sale_id: Uuid, body: &SaleUnitCreate) -> Result<SaleUnit> {
    fetch(conn, Method::POST, &path(sale_id), body).await
}

/// GET /shoppingMall/admin/sales/{saleId}/units/{unitId}
pub async fn at(conn: &Connection, sale_id: Uuid, id: Uuid) -> Result<SaleUnit> {
    fetch_without_body(conn, Method::GET, &format!("{}/{}", path(sale_id), id)).await
}

/// PUT /shoppingMall/admin/sales/{saleId}/units/{unitId}
pub async fn update(
    conn: &Connection,
    sale_id: Uuid,
    id: Uuid,
    body: &SaleUnitUpdate,
) -> Result<SaleUnit> {
    fetch(conn, Method::PUT, &format!("{}/{}", path(sale_id), id), body).await
}
