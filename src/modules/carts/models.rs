use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{DeclaredSchema, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub shopping_mall_member_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl DeclaredSchema for Cart {
    fn schema() -> Schema {
        Schema::object("IShoppingMallCart")
            .property("id", Schema::uuid())
            .property("shopping_mall_member_id", Schema::uuid())
            .property("created_at", Schema::date_time())
    }
}

/// Carts are created empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartCreate {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub shopping_mall_cart_id: Uuid,
    pub shopping_mall_sale_unit_id: Uuid,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

impl DeclaredSchema for CartItem {
    fn schema() -> Schema {
        Schema::object("IShoppingMallCartItem")
            .property("id", Schema::uuid())
            .property("shopping_mall_cart_id", Schema::uuid())
            .property("shopping_mall_sale_unit_id", Schema::uuid())
            .property("quantity", Schema::integer().minimum(1))
            .property("created_at", Schema::date_time())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemCreate {
    pub shopping_mall_sale_unit_id: Uuid,
    pub quantity: i64,
}
