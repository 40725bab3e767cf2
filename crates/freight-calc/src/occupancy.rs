//! 佔用率分配
//!
//! 給定卡車分解與產生它的總英尺，計算每類每車的分攤英尺
//! 與佔用率（0..=1）。比例切分是顯示用的啟發式，不是物理
//! 約束；每次都從分解重新計算，不做儲存。

use freight_core::{Decomposition, FreightError, OccupancyEntry, Result};
use rust_decimal::Decimal;

/// 佔用率分配器
pub struct OccupancyAllocator;

impl OccupancyAllocator {
    /// 計算各類別的佔用率
    ///
    /// 英尺依各類別占理論總容量的比例切分：
    /// `class_cap = count × capacity`，`share = class_cap / Σ class_cap`，
    /// `assigned = total × share`，`per_truck = assigned / count`，
    /// `fraction = min(1, per_truck / capacity)`。
    /// 單一類別時退化為 `total / count`（同一公式）。
    ///
    /// 分解為空而總英尺 > 0 時回傳 `EmptyDecomposition`
    /// （分解器與分配器被亂序呼叫的程式錯誤）；
    /// 兩者皆為零則回傳空序列。
    pub fn allocate(
        decomposition: &Decomposition,
        total_linear_feet: Decimal,
    ) -> Result<Vec<OccupancyEntry>> {
        if decomposition.is_empty() {
            if total_linear_feet > Decimal::ZERO {
                return Err(FreightError::EmptyDecomposition(total_linear_feet));
            }
            return Ok(Vec::new());
        }

        let total_capacity: Decimal = decomposition
            .entries()
            .iter()
            .map(|e| Decimal::from(e.count) * e.class.capacity_feet())
            .sum();

        let entries = decomposition
            .entries()
            .iter()
            .map(|e| {
                let capacity = e.class.capacity_feet();
                let class_capacity = Decimal::from(e.count) * capacity;
                let assigned_feet = total_linear_feet * class_capacity / total_capacity;
                let per_truck_feet = assigned_feet / Decimal::from(e.count);
                let occupancy_fraction = (per_truck_feet / capacity).min(Decimal::ONE);

                OccupancyEntry {
                    class: e.class,
                    per_truck_feet,
                    occupancy_fraction,
                }
            })
            .collect();

        Ok(entries)
    }
}
