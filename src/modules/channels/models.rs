use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{DeclaredSchema, PageRequest, RandomGenerator, Schema};

/// Sales channel (web mall, mobile app, ...) administered by admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeclaredSchema for Channel {
    fn schema() -> Schema {
        Schema::object("IShoppingMallChannel")
            .property("id", Schema::uuid())
            .property("code", Schema::string().length(1, 64))
            .property("name", Schema::string().length(1, 255))
            .property("description", Schema::string().nullable())
            .property("created_at", Schema::date_time())
            .property("updated_at", Schema::date_time())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelCreate {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl ChannelCreate {
    pub fn random(random: &mut RandomGenerator) -> Self {
        Self {
            code: random.alphanumeric(16).to_lowercase(),
            name: random.paragraph(3),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of the channel listing
///
/// `sort` entries are `+field` (ascending) or `-field` (descending), where
/// field is `code`, `name` or `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelRequest {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<ChannelSearch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}
