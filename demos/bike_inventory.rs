//! 自行車庫存示例：多層 BOM 的訂單展開

use bom_inventory::*;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bike Inventory Demo ===\n");

    // 步驟 1: 註冊零件
    println!("[1] Register Parts");
    let mut catalog = Catalog::new();
    for part in ["P-RIM", "P-SPOKE", "P-TUBE", "P-SEAT", "P-CHAIN"] {
        catalog.register_part(part)?;
        println!("    {}", part);
    }
    println!();

    // 步驟 2: 註冊組件（子件必須先註冊）
    println!("[2] Register Assemblies");
    let mut wheel = BillOfMaterials::new();
    wheel.add("P-RIM", 1)?;
    wheel.add("P-SPOKE", 32)?;
    catalog.register_assembly("A-WHEEL", 20, wheel)?;
    println!("    A-WHEEL: capacity 20, 1 rim + 32 spokes");

    let mut frame = BillOfMaterials::new();
    frame.add("P-TUBE", 3)?;
    frame.add("P-SEAT", 1)?;
    catalog.register_assembly("A-FRAME", 10, frame)?;
    println!("    A-FRAME: capacity 10, 3 tubes + 1 seat");

    let mut bike = BillOfMaterials::new();
    bike.add("A-FRAME", 1)?;
    bike.add("A-WHEEL", 2)?;
    bike.add("P-CHAIN", 1)?;
    catalog.register_assembly("A-BIKE", 5, bike)?;
    println!("    A-BIKE: capacity 5, 1 frame + 2 wheels + 1 chain\n");

    // 步驟 3: 預先備貨
    println!("[3] Stock Wheels");
    let resolver = DemandResolver::default();
    let mut resolution = Resolution::new();
    resolver.stock(&mut catalog, "A-WHEEL", 5, &mut resolution)?;
    println!("    A-WHEEL on hand: {}\n", on_hand(&catalog, "A-WHEEL"));

    // 步驟 4: 客戶訂單
    println!("[4] Fulfill Order: 4 bikes + 1 spare wheel");
    let mut resolution = Resolution::new();
    resolver.fulfill_order(
        &mut catalog,
        &[("A-BIKE".to_string(), 4), ("A-WHEEL".to_string(), 1)],
        &mut resolution,
    )?;

    for order in resolution.manufacturing_orders() {
        println!("    [{}] make {} x {}", order.id, order.quantity, order.assembly_id);
    }
    println!();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    inv_cli::report::shortages(&mut out, &resolution.shortages)?;
    println!();

    // 步驟 5: 庫存總表
    println!("[5] Inventory After Order");
    inv_cli::report::inventory(&mut out, &catalog, InventoryConfig::default().restock_threshold)?;

    Ok(())
}

fn on_hand(catalog: &Catalog, id: &str) -> Quantity {
    catalog.assembly(id).map_or(0, |assembly| assembly.on_hand)
}
