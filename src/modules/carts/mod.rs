// Carts module

pub mod api;
pub mod models;

pub use models::{Cart, CartCreate, CartItem, CartItemCreate};
