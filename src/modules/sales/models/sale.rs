// A sale is a seller's listing within a channel (and optionally a section).
// Sellers create sales; admins attach the purchasable units.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{DeclaredSchema, PageRequest, RandomGenerator, Schema};

/// Sale status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Being prepared, not visible to customers
    Draft,
    /// Open for purchase
    Active,
    /// Temporarily suspended by the seller
    Paused,
    /// Ended
    Closed,
}

impl SaleStatus {
    pub const VALUES: [&'static str; 4] = ["draft", "active", "paused", "closed"];
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Draft
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleStatus::Draft => write!(f, "draft"),
            SaleStatus::Active => write!(f, "active"),
            SaleStatus::Paused => write!(f, "paused"),
            SaleStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for SaleStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(SaleStatus::Draft),
            "active" => Ok(SaleStatus::Active),
            "paused" => Ok(SaleStatus::Paused),
            "closed" => Ok(SaleStatus::Closed),
            _ => Err(format!("Invalid sale status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub shopping_mall_seller_id: Uuid,
    pub shopping_mall_channel_id: Uuid,
    pub shopping_mall_section_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub status: SaleStatus,
    pub opened_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeclaredSchema for Sale {
    fn schema() -> Schema {
        Schema::object("IShoppingMallSale")
            .property("id", Schema::uuid())
            .property("shopping_mall_seller_id", Schema::uuid())
            .property("shopping_mall_channel_id", Schema::uuid())
            .property("shopping_mall_section_id", Schema::uuid().nullable())
            .property("title", Schema::string().length(1, 255))
            .property("description", Schema::string().nullable())
            .property("status", Schema::enumeration(&SaleStatus::VALUES))
            .property("opened_at", Schema::date_time().nullable())
            .property("closed_at", Schema::date_time().nullable())
            .property("created_at", Schema::date_time())
            .property("updated_at", Schema::date_time())
    }
}

/// Sale creation body. Relational fields without a value are sent as
/// explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleCreate {
    pub shopping_mall_channel_id: Uuid,
    pub shopping_mall_section_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub status: SaleStatus,
    pub opened_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl SaleCreate {
    pub fn random(random: &mut RandomGenerator, channel_id: Uuid) -> Self {
        let opened_at = Utc::now();
        Self {
            shopping_mall_channel_id: channel_id,
            shopping_mall_section_id: None,
            title: random.paragraph(4),
            description: Some(random.content(2)),
            status: SaleStatus::Active,
            opened_at: Some(opened_at),
            closed_at: Some(opened_at + Duration::days(random.integer(7..=60))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRequest {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SaleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopping_mall_channel_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}
