// Test Helper Modules
//
// Integration tests drive the real SDK and scenarios over HTTP against an
// in-memory mall backend.
//
// Usage (from tests/integration/*.rs):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
//   #[actix_web::test]
//   async fn test_something() {
//       let backend = helpers::spawn_mock_mall();
//       let ctx = ScenarioContext::new("test_something", &backend.connection, 1);
//       ...
//   }

#![allow(dead_code)]

pub mod mock_mall;
pub mod test_server;

pub use mock_mall::{Faults, MockMall};
pub use test_server::*;
