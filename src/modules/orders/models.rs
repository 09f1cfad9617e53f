use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{DeclaredSchema, PageRequest, Schema};

/// Order status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting payment
    Pending,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub const VALUES: [&'static str; 3] = ["pending", "paid", "cancelled"];
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An order placed from a member's cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub shopping_mall_member_id: Uuid,
    pub shopping_mall_cart_id: Uuid,
    pub status: OrderStatus,
    /// Sum of `real_price * quantity` over the cart items
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub address: String,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeclaredSchema for Order {
    fn schema() -> Schema {
        Schema::object("IShoppingMallOrder")
            .property("id", Schema::uuid())
            .property("shopping_mall_member_id", Schema::uuid())
            .property("shopping_mall_cart_id", Schema::uuid())
            .property("status", Schema::enumeration(&OrderStatus::VALUES))
            .property("total_price", Schema::number().minimum(0))
            .property("address", Schema::string().length(1, 1024))
            .property("memo", Schema::string().nullable())
            .property("created_at", Schema::date_time())
            .property("updated_at", Schema::date_time())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub shopping_mall_cart_id: Uuid,
    pub address: String,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}
