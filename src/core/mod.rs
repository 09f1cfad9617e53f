pub mod connection;
pub mod error;
pub mod pagination;
pub mod random;
pub mod schema;
pub mod traits;

pub use connection::Connection;
pub use error::{Result, ScenarioError};
pub use pagination::{Page, PageRequest, Pagination};
pub use random::RandomGenerator;
pub use schema::{Schema, StringFormat, Violation};
pub use traits::{DeclaredSchema, Scenario};
