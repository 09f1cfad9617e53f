// Orders module

pub mod api;
pub mod models;

pub use models::{Order, OrderCreate, OrderRequest, OrderStatus};
