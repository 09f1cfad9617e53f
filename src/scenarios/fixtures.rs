// Shared dependency chain: admin -> channel -> seller -> sale -> sale unit

use crate::core::Result;
use crate::modules::actors::{ActorRole, ActorSession};
use crate::modules::channels::{self, Channel, ChannelCreate};
use crate::modules::sales::{self, Sale, SaleCreate, SaleUnit, SaleUnitCreate};
use crate::modules::scenario::validator::assert_foreign_key;
use crate::modules::scenario::{DependencyChain, ScenarioContext};

pub struct SaleFixture {
    pub admin: ActorSession,
    pub seller: ActorSession,
    pub channel: Channel,
    pub sale: Sale,
    pub unit: SaleUnit,
    pub unit_body: SaleUnitCreate,
    pub chain: DependencyChain,
}

pub async fn prepare_sale_unit(ctx: &mut ScenarioContext) -> Result<SaleFixture> {
    let actors = ctx.actors();
    let mut chain = ctx.chain();

    let admin = actors.join_random(ActorRole::Admin, &mut ctx.random).await?;
    chain.record("admin", &admin.authorized)?;

    let channel_body = ChannelCreate::random(&mut ctx.random);
    let channel = chain
        .step("channel", |_| channels::api::create(&admin.connection, &channel_body))
        .await?;

    let seller = actors.join_random(ActorRole::Seller, &mut ctx.random).await?;
    chain.record("seller", &seller.authorized)?;

    let sale = chain
        .step("sale", |outputs| {
            let body = outputs
                .id("channel")
                .map(|channel_id| SaleCreate::random(&mut ctx.random, channel_id));
            let conn = &seller.connection;
            async move { sales::api::create(conn, &body?).await }
        })
        .await?;
    assert_foreign_key("sale.shopping_mall_channel_id", channel.id, sale.shopping_mall_channel_id)?;
    assert_foreign_key("sale.shopping_mall_seller_id", seller.id(), sale.shopping_mall_seller_id)?;

    let unit_body = SaleUnitCreate::random(&mut ctx.random);
    let unit = chain
        .step("sale_unit", |outputs| {
            let conn = &admin.connection;
            let body = &unit_body;
            async move { sales::units::create(conn, outputs.id("sale")?, body).await }
        })
        .await?;
    assert_foreign_key("sale_unit.shopping_mall_sale_id", sale.id, unit.shopping_mall_sale_id)?;

    Ok(SaleFixture {
        admin,
        seller,
        channel,
        sale,
        unit,
        unit_body,
        chain,
    })
}
