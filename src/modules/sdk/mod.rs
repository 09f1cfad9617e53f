// Typed binding to the shopping-mall backend
//
// Each resource module exposes one async function per backend operation.
// They all funnel through `fetcher`, which sends the request with the
// connection's headers and validates the response structure.

pub mod fetcher;

pub use fetcher::{assert_type, fetch, fetch_empty, fetch_without_body};
