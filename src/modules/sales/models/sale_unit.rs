use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{DeclaredSchema, RandomGenerator, Schema};

/// Purchasable unit of a sale (e.g. "Large / Blue")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleUnit {
    pub id: Uuid,
    pub shopping_mall_sale_id: Uuid,
    pub name: String,
    pub primary: bool,
    pub required: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub nominal_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub real_price: Decimal,
    pub stock_quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeclaredSchema for SaleUnit {
    fn schema() -> Schema {
        Schema::object("IShoppingMallSaleUnit")
            .property("id", Schema::uuid())
            .property("shopping_mall_sale_id", Schema::uuid())
            .property("name", Schema::string().length(1, 255))
            .property("primary", Schema::boolean())
            .property("required", Schema::boolean())
            .property("nominal_price", Schema::number().minimum(0))
            .property("real_price", Schema::number().minimum(0))
            .property("stock_quantity", Schema::integer().minimum(0))
            .property("created_at", Schema::date_time())
            .property("updated_at", Schema::date_time())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleUnitCreate {
    pub name: String,
    pub primary: bool,
    pub required: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub nominal_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub real_price: Decimal,
    pub stock_quantity: i64,
}

impl SaleUnitCreate {
    /// Random unit whose real price never exceeds its nominal price
    pub fn random(random: &mut RandomGenerator) -> Self {
        let nominal_price = random.decimal(1_000..=100_000, 0);
        let discount = random.integer(0..=30);
        let real_price = (nominal_price * Decimal::from(100 - discount) / Decimal::from(100))
            .round_dp(0);

        Self {
            name: random.paragraph(2),
            primary: true,
            required: true,
            nominal_price,
            real_price,
            stock_quantity: random.integer(10..=500),
        }
    }
}

/// Partial update; absent fields are left unchanged by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleUnitUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub nominal_price: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub real_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
}
