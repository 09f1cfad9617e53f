use rust_decimal::Decimal;

use crate::core::{PageRequest, Result};
use crate::modules::actors::ActorRole;
use crate::modules::carts::{self, CartCreate, CartItemCreate};
use crate::modules::orders::{self, OrderCreate, OrderRequest, OrderStatus};
use crate::modules::scenario::validator::{
    assert_all, assert_echoes, assert_equals, assert_foreign_key, assert_pagination,
    assert_predicate,
};
use crate::modules::scenario::ScenarioContext;

use super::fixtures::prepare_sale_unit;

/// Member puts a sale unit in a cart and orders it.
pub async fn test_api_cart_order_flow(mut ctx: ScenarioContext) -> Result<()> {
    let mut fixture = prepare_sale_unit(&mut ctx).await?;
    let member = ctx
        .actors()
        .join_random(ActorRole::Member, &mut ctx.random)
        .await?;
    fixture.chain.record("member", &member.authorized)?;
    let conn = &member.connection;

    let cart_body = CartCreate::default();
    let cart = fixture
        .chain
        .step("cart", |_| carts::api::create(conn, &cart_body))
        .await?;
    assert_foreign_key("cart.shopping_mall_member_id", member.id(), cart.shopping_mall_member_id)?;

    let quantity = ctx.random.integer(1..=5);
    let item_body = CartItemCreate {
        shopping_mall_sale_unit_id: fixture.unit.id,
        quantity,
    };
    let item = fixture
        .chain
        .step("cart_item", |outputs| async move {
            carts::api::add_item(conn, outputs.id("cart")?, &item_body).await
        })
        .await?;
    assert_foreign_key("cart_item.shopping_mall_cart_id", cart.id, item.shopping_mall_cart_id)?;
    assert_foreign_key(
        "cart_item.shopping_mall_sale_unit_id",
        fixture.unit.id,
        item.shopping_mall_sale_unit_id,
    )?;

    let items = carts::api::items(conn, cart.id).await?;
    assert_predicate("cart lists the added item", items.iter().any(|i| i.id == item.id))?;

    let order_body = OrderCreate {
        shopping_mall_cart_id: cart.id,
        address: ctx.random.paragraph(4),
        memo: None,
    };
    let order = ctx
        .invoke("orders.create", orders::api::create(conn, &order_body))
        .await?;
    fixture.chain.record("order", &order)?;

    assert_echoes("order echoes create body", &order_body, &order, &[])?;
    assert_foreign_key("order.shopping_mall_member_id", member.id(), order.shopping_mall_member_id)?;
    assert_equals("order.status", &OrderStatus::Pending, &order.status)?;
    // prices travel as JSON numbers, so allow for float rounding
    let expected_total = fixture.unit.real_price * Decimal::from(quantity);
    assert_predicate(
        "order.total_price is real_price * quantity",
        (expected_total - order.total_price).abs() < Decimal::new(1, 2),
    )?;

    let request = OrderRequest {
        page: PageRequest::default(),
        status: Some(OrderStatus::Pending),
        sort: vec!["-created_at".to_string()],
    };
    let page = orders::api::index(conn, &request).await?;
    assert_pagination("order index pagination", &page, &request.page)?;
    assert_all("order index honours status filter", &page.data, |o| {
        o.status == OrderStatus::Pending
    })?;
    assert_predicate("order index lists the new order", page.data.iter().any(|o| o.id == order.id))?;

    let fetched = orders::api::at(conn, order.id).await?;
    assert_equals("order read back", &order, &fetched)
}
