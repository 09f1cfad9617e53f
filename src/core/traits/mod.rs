pub mod declared_schema;
pub mod scenario;

pub use declared_schema::DeclaredSchema;
pub use scenario::Scenario;
