use crate::core::schema::Schema;

/// Types whose JSON form has a declared structural schema.
///
/// Every response type fetched from the backend implements this; the body is
/// checked against `schema()` before it is deserialized.
pub trait DeclaredSchema {
    fn schema() -> Schema;
}

impl<T: DeclaredSchema> DeclaredSchema for Vec<T> {
    fn schema() -> Schema {
        Schema::array(T::schema())
    }
}
