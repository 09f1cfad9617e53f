// Scenario catalog
//
// One module per business flow. Every scenario provisions its own actors and
// resources, so the catalog can run in any order and in parallel.

pub mod access_control;
pub mod actor_tokens;
pub mod cart_order;
pub mod channel_index;
pub mod fixtures;
pub mod order_cross_tenant;
pub mod sale_unit_update;

use std::sync::Arc;

use crate::core::Scenario;
use crate::modules::scenario::scenario;

/// Every scenario shipped with the crate, in reporting order
pub fn catalog() -> Vec<Arc<dyn Scenario>> {
    vec![
        scenario("test_api_sale_unit_update", sale_unit_update::test_api_sale_unit_update),
        scenario(
            "test_api_channel_index_pagination",
            channel_index::test_api_channel_index_pagination,
        ),
        scenario("test_api_cart_order_flow", cart_order::test_api_cart_order_flow),
        scenario("test_api_sale_access_control", access_control::test_api_sale_access_control),
        scenario("test_api_order_cross_tenant", order_cross_tenant::test_api_order_cross_tenant),
        scenario("test_api_actor_token_lifecycle", actor_tokens::test_api_actor_token_lifecycle),
    ]
}
