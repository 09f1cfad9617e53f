// Sales module

pub mod api;
pub mod models;
pub mod units;

pub use models::{Sale, SaleCreate, SaleRequest, SaleStatus, SaleUnit, SaleUnitCreate, SaleUnitUpdate};
