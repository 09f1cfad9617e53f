pub mod sale;
pub mod sale_unit;

pub use sale::{Sale, SaleCreate, SaleRequest, SaleStatus};
pub use sale_unit::{SaleUnit, SaleUnitCreate, SaleUnitUpdate};
