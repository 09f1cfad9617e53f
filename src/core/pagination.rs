use serde::{Deserialize, Serialize};

use super::schema::Schema;
use super::traits::DeclaredSchema;

/// Page size the backend applies when a request leaves `limit` empty
pub const DEFAULT_LIMIT: u32 = 100;

/// Pagination block of a listing response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number, starting at 1
    pub current: u32,
    /// Maximum number of records per page
    pub limit: u32,
    /// Total number of records matching the request
    pub records: u32,
    /// Total number of pages, `ceil(records / limit)`
    pub pages: u32,
}

impl Pagination {
    pub fn expected_pages(records: u32, limit: u32) -> u32 {
        if limit == 0 {
            0
        } else {
            records.div_ceil(limit)
        }
    }
}

/// A page of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub data: Vec<T>,
}

impl<T: DeclaredSchema> DeclaredSchema for Page<T> {
    fn schema() -> Schema {
        let item = T::schema();
        Schema::object(format!("IPage<{}>", item.type_name()))
            .property(
                "pagination",
                Schema::object("IPage.IPagination")
                    .property("current", Schema::integer().minimum(0))
                    .property("limit", Schema::integer().minimum(0))
                    .property("records", Schema::integer().minimum(0))
                    .property("pages", Schema::integer().minimum(0)),
            )
            .property("data", Schema::array(item))
    }
}

/// Paging fields shared by every search request body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Page the backend will serve, defaulting to the first
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}
