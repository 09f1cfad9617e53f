pub mod actors;
pub mod carts;
pub mod channels;
pub mod orders;
pub mod sales;
pub mod scenario;
pub mod sdk;
