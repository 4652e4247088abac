//! 補貨策略示例：門檻與全面補貨順序

use bom_inventory::*;
use rust_decimal::Decimal;

fn build_catalog() -> Result<Catalog, InventoryError> {
    let mut catalog = Catalog::new();
    catalog.register_part("P-BOLT")?;

    let mut bracket = BillOfMaterials::new();
    bracket.add("P-BOLT", 4)?;
    catalog.register_assembly("A-BRACKET", 12, bracket)?;

    let mut shelf = BillOfMaterials::new();
    shelf.add("A-BRACKET", 2)?;
    shelf.add("P-BOLT", 2)?;
    catalog.register_assembly("A-SHELF", 6, shelf)?;

    if let Some(bracket) = catalog.assembly_mut("A-BRACKET") {
        bracket.on_hand = 7;
    }
    if let Some(shelf) = catalog.assembly_mut("A-SHELF") {
        shelf.on_hand = 2;
    }
    Ok(catalog)
}

fn run(label: &str, config: &InventoryConfig) -> Result<(), InventoryError> {
    println!("--- {} ---", label);
    println!(
        "    threshold {}, order {:?}",
        config.restock_threshold, config.restock_order
    );

    let mut catalog = build_catalog()?;
    let resolver = DemandResolver::new(config);
    let mut resolution = Resolution::new();
    resolver.restock(&mut catalog, RestockTarget::All, &mut resolution)?;

    for event in &resolution.events {
        match event {
            ResolutionEvent::Restock { assembly_id, quantity } => {
                println!("    restock {} +{}", assembly_id, quantity)
            }
            ResolutionEvent::Manufacture(order) => {
                println!("    make {} x {}", order.quantity, order.assembly_id)
            }
        }
    }

    for assembly in catalog.assemblies() {
        println!("    {}: {}/{}", assembly.id, assembly.on_hand, assembly.capacity);
    }
    for (id, quantity) in resolution.shortages.iter() {
        println!("    need {} x {}", quantity, id);
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Restock Policy Demo ===\n");

    run("Default", &InventoryConfig::default())?;

    // 較高門檻：A-BRACKET 7/12 也會補貨
    run(
        "High threshold",
        &InventoryConfig::new().with_restock_threshold(Decimal::new(75, 2)),
    )?;

    // 依註冊順序：A-BRACKET 先檢查（7/12 不補貨），A-SHELF 補貨時才消耗其庫存
    run(
        "Registration order",
        &InventoryConfig::new().with_restock_order(RestockOrder::Registration),
    )?;

    Ok(())
}
