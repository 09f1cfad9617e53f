// Negative paths around sale creation. Each probe alters exactly one aspect
// of an otherwise valid call.

use reqwest::Method;
use serde_json::json;

use crate::core::Result;
use crate::modules::actors::ActorRole;
use crate::modules::channels::{self, Channel, ChannelCreate};
use crate::modules::sales::{self, SaleCreate, SaleUnitCreate};
use crate::modules::scenario::prober::{expect_rejection, nonexistent_id, ProbeKind};
use crate::modules::scenario::validator::assert_foreign_key;
use crate::modules::scenario::ScenarioContext;
use crate::modules::sdk;

pub async fn test_api_sale_access_control(mut ctx: ScenarioContext) -> Result<()> {
    let actors = ctx.actors();
    let admin = actors.join_random(ActorRole::Admin, &mut ctx.random).await?;
    let seller = actors.join_random(ActorRole::Seller, &mut ctx.random).await?;
    let member = actors.join_random(ActorRole::Member, &mut ctx.random).await?;

    let channel = channels::api::create(&admin.connection, &ChannelCreate::random(&mut ctx.random)).await?;
    let sale_body = SaleCreate::random(&mut ctx.random, channel.id);

    expect_rejection(
        ProbeKind::Unauthenticated,
        "sale creation without a token",
        sales::api::create(&seller.connection.anonymous(), &sale_body),
    )
    .await?;
    expect_rejection(
        ProbeKind::WrongRole,
        "member creating a sale",
        sales::api::create(&member.connection, &sale_body),
    )
    .await?;
    expect_rejection(
        ProbeKind::WrongRole,
        "seller creating a channel",
        channels::api::create(&seller.connection, &ChannelCreate::random(&mut ctx.random)),
    )
    .await?;

    let orphan = SaleCreate {
        shopping_mall_channel_id: nonexistent_id(&mut ctx.random),
        ..sale_body.clone()
    };
    expect_rejection(
        ProbeKind::NonExistentId,
        "sale in a channel that does not exist",
        sales::api::create(&seller.connection, &orphan),
    )
    .await?;
    expect_rejection(
        ProbeKind::NonExistentId,
        "sale unit under a sale that does not exist",
        sales::units::create(
            &admin.connection,
            nonexistent_id(&mut ctx.random),
            &SaleUnitCreate::random(&mut ctx.random),
        ),
    )
    .await?;

    let untitled = SaleCreate {
        title: String::new(),
        ..sale_body.clone()
    };
    expect_rejection(
        ProbeKind::MalformedInput,
        "sale with an empty title",
        sales::api::create(&seller.connection, &untitled),
    )
    .await?;
    // typed bodies cannot omit a required field, so send raw JSON
    expect_rejection(
        ProbeKind::MalformedInput,
        "channel without a code",
        sdk::fetch::<_, Channel>(
            &admin.connection,
            Method::POST,
            "/shoppingMall/admin/channels",
            &json!({ "name": ctx.random.paragraph(2), "description": null }),
        ),
    )
    .await?;

    // the untouched body still goes through, so the probes above failed for
    // the altered aspect only
    let sale = ctx
        .invoke("sales.create", sales::api::create(&seller.connection, &sale_body))
        .await?;
    assert_foreign_key("sale.shopping_mall_channel_id", channel.id, sale.shopping_mall_channel_id)
}
