use crate::core::{PageRequest, Result};
use crate::modules::actors::ActorRole;
use crate::modules::carts::{self, CartCreate, CartItemCreate};
use crate::modules::orders::{self, OrderCreate, OrderRequest};
use crate::modules::scenario::prober::{expect_rejection, nonexistent_id, ProbeKind};
use crate::modules::scenario::validator::{assert_all, assert_predicate};
use crate::modules::scenario::ScenarioContext;

use super::fixtures::prepare_sale_unit;

/// One member's order is invisible to another member.
pub async fn test_api_order_cross_tenant(mut ctx: ScenarioContext) -> Result<()> {
    let fixture = prepare_sale_unit(&mut ctx).await?;
    let actors = ctx.actors();
    let owner = actors.join_random(ActorRole::Member, &mut ctx.random).await?;
    let stranger = actors.join_random(ActorRole::Member, &mut ctx.random).await?;

    let cart = carts::api::create(&owner.connection, &CartCreate::default()).await?;
    let item = CartItemCreate {
        shopping_mall_sale_unit_id: fixture.unit.id,
        quantity: 1,
    };
    carts::api::add_item(&owner.connection, cart.id, &item).await?;

    expect_rejection(
        ProbeKind::CrossTenant,
        "adding to another member's cart",
        carts::api::add_item(&stranger.connection, cart.id, &item),
    )
    .await?;

    let order_body = OrderCreate {
        shopping_mall_cart_id: cart.id,
        address: ctx.random.paragraph(4),
        memo: Some(ctx.random.paragraph(2)),
    };
    expect_rejection(
        ProbeKind::CrossTenant,
        "ordering another member's cart",
        orders::api::create(&stranger.connection, &order_body),
    )
    .await?;

    let order = ctx
        .invoke("orders.create", orders::api::create(&owner.connection, &order_body))
        .await?;

    expect_rejection(
        ProbeKind::CrossTenant,
        "reading another member's order",
        orders::api::at(&stranger.connection, order.id),
    )
    .await?;
    expect_rejection(
        ProbeKind::Unauthenticated,
        "reading an order without a token",
        orders::api::at(&owner.connection.anonymous(), order.id),
    )
    .await?;
    expect_rejection(
        ProbeKind::NonExistentId,
        "reading an order that does not exist",
        orders::api::at(&owner.connection, nonexistent_id(&mut ctx.random)),
    )
    .await?;

    let request = OrderRequest {
        page: PageRequest::default(),
        ..Default::default()
    };
    let page = orders::api::index(&stranger.connection, &request).await?;
    assert_all("order index is scoped to the caller", &page.data, |o| {
        o.shopping_mall_member_id == stranger.id()
    })?;
    assert_predicate(
        "order index hides other members' orders",
        page.data.iter().all(|o| o.id != order.id),
    )
}
