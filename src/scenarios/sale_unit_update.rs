use crate::core::Result;
use crate::modules::sales::{self, SaleUnitUpdate};
use crate::modules::scenario::validator::{
    assert_echoes, assert_equals, assert_unmodified, assert_updated_at_monotonic,
};
use crate::modules::scenario::ScenarioContext;

use super::fixtures::prepare_sale_unit;

/// Admin renames a sale unit; identity and every other field survive.
pub async fn test_api_sale_unit_update(mut ctx: ScenarioContext) -> Result<()> {
    let fixture = prepare_sale_unit(&mut ctx).await?;
    let unit = &fixture.unit;
    assert_echoes("sale_unit echoes create body", &fixture.unit_body, unit, &[])?;

    let update = SaleUnitUpdate {
        name: Some(ctx.random.paragraph(3)),
        ..Default::default()
    };
    let updated = ctx
        .invoke(
            "sales.units.update",
            sales::units::update(&fixture.admin.connection, fixture.sale.id, unit.id, &update),
        )
        .await?;

    assert_equals("sale_unit.id", &unit.id, &updated.id)?;
    assert_equals(
        "sale_unit.name",
        update.name.as_deref().unwrap_or_default(),
        updated.name.as_str(),
    )?;
    assert_unmodified("sale_unit update keeps other fields", unit, &updated, &["name"])?;
    assert_updated_at_monotonic("sale_unit.updated_at", unit.updated_at, updated.updated_at)?;

    let reread = sales::units::at(&fixture.admin.connection, fixture.sale.id, unit.id).await?;
    assert_equals("sale_unit read after update", &updated, &reread)
}
