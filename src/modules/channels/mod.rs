// Channels module

pub mod api;
pub mod models;

pub use models::{Channel, ChannelCreate, ChannelRequest, ChannelSearch};
