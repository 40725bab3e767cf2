//! 文字回復路徑示例
//!
//! 模擬只剩外部產生器敘述、需要重建結構化分解的情形

use freight::{FreightPlanner, MemoryCatalog, RecommendationParser};

fn main() -> anyhow::Result<()> {
    println!("=== 敘述解析示例 ===\n");

    let narratives = [
        "2 Full Truck(s) and 1 LTL",
        "We suggest 1 x Half Truck for this order.",
        "Probably a full truckload and a less than truckload carrier",
        "No usable recommendation here",
    ];

    for narrative in narratives {
        println!("敘述: {narrative:?}");
        for entry in RecommendationParser::parse(narrative) {
            println!("  → {} x {}", entry.count, entry.class.label());
        }
        println!();
    }

    // 由敘述重建完整計劃（未提供總英尺 → 以滿載容量分攤）
    let planner = FreightPlanner::new(MemoryCatalog::new());
    let plan = planner.recover_from_narrative("2 Full Truck(s) and 1 LTL", None)?;

    println!("重建計劃: {}", plan.summary);
    println!("假定英尺: {}", plan.total_linear_feet);
    for entry in &plan.occupancy {
        println!(
            "  - {}: 佔用率 {}",
            entry.class.label(),
            entry.occupancy_fraction.round_dp(2)
        );
    }

    Ok(())
}
