//! 簡單裝載計算示例

use freight::{FreightPlanner, Item, ItemAttributes, ItemCategory, MemoryCatalog, Shipment};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 簡單裝載計算示例 ===\n");

    // 建立假型錄
    let catalog = MemoryCatalog::new()
        .with_item(
            "CARPET-ROLL-12",
            ItemAttributes::new(ItemCategory::RollGood)
                .with_weight_lbs(Decimal::from(220))
                .with_rolls_per_pallet(4)
                .with_pallet_length_feet(Decimal::from(12)),
        )
        .with_item(
            "ADHESIVE-PAIL",
            ItemAttributes::new(ItemCategory::Accessory)
                .with_weight_lbs(Decimal::from(30))
                .with_units_per_pallet(24),
        );

    // 建立出貨單
    let mut shipment = Shipment::new();
    shipment.add_item(Item::new("CARPET-ROLL-12", 68));
    shipment.add_item(Item::new("ADHESIVE-PAIL", 10));

    println!("出貨清單:");
    for item in shipment.items() {
        println!("  - 品項: {}, 數量: {}", item.key, item.quantity);
    }

    // 執行計算
    let planner = FreightPlanner::new(catalog);
    let plan = planner.calculate(&shipment)?;

    println!("\n總線性英尺: {}", plan.total_display());
    println!("總重量（磅）: {}", plan.total_weight_lbs);
    println!("卡車建議: {}", plan.summary);

    println!("\n各群組明細:");
    for group in &plan.breakdown.groups {
        println!(
            "  - {:?} × {} 英尺: {} 棧板 → {} 槽位 → {} 英尺",
            group.category,
            group.pallet_length_feet,
            group.pallet_count,
            group.floor_slots,
            group.feet
        );
    }

    println!("\n各類別佔用率:");
    for entry in &plan.occupancy {
        println!(
            "  - {}: 每車 {} 英尺, 佔用率 {}%",
            entry.class.label(),
            entry.per_truck_feet.round_dp(2),
            (entry.occupancy_fraction * Decimal::from(100)).round_dp(1)
        );
    }

    Ok(())
}
