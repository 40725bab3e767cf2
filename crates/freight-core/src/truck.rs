//! 卡車類別與分解模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 卡車類別
///
/// 依容量排序：LTL < Half < Full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TruckClass {
    /// 零擔（Less Than Truckload），餘量上限 14 英尺（不含）
    Ltl,
    /// 半車，容量 24 英尺
    Half,
    /// 整車，容量 48 英尺
    Full,
}

impl TruckClass {
    /// 車廂容量（線性英尺）
    pub fn capacity_feet(&self) -> Decimal {
        match self {
            TruckClass::Ltl => Decimal::from(14),
            TruckClass::Half => Decimal::from(24),
            TruckClass::Full => Decimal::from(48),
        }
    }

    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            TruckClass::Ltl => "LTL",
            TruckClass::Half => "Half",
            TruckClass::Full => "Full",
        }
    }
}

/// 單一類別的卡車配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckAllocation {
    /// 卡車類別
    pub class: TruckClass,

    /// 車輛數
    pub count: u64,
}

impl TruckAllocation {
    /// 創建新的卡車配置
    pub fn new(class: TruckClass, count: u64) -> Self {
        Self { class, count }
    }
}

/// 卡車分解（出貨計劃的結構化形式）
///
/// 每個類別至多一筆；單一類別或混合（兩類以上）。
/// 結構化形式為權威，摘要字串僅供敘述輸出。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    entries: Vec<TruckAllocation>,
}

impl Decomposition {
    /// 創建零卡車分解（「無出貨」的終端情形）
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 由配置序列建立分解
    ///
    /// 重複類別以加總合併（飽和加法，極端輸入不得溢位），
    /// 保留首見順序；車輛數為零的配置忽略
    pub fn from_entries(entries: impl IntoIterator<Item = TruckAllocation>) -> Self {
        let mut merged: Vec<TruckAllocation> = Vec::new();
        for entry in entries {
            if entry.count == 0 {
                continue;
            }
            match merged.iter_mut().find(|e| e.class == entry.class) {
                Some(existing) => existing.count = existing.count.saturating_add(entry.count),
                None => merged.push(entry),
            }
        }
        Self { entries: merged }
    }

    /// 配置序列
    pub fn entries(&self) -> &[TruckAllocation] {
        &self.entries
    }

    /// 總車輛數（飽和加總）
    pub fn total_trucks(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |total, e| total.saturating_add(e.count))
    }

    /// 檢查是否為混合分解（兩類以上）
    pub fn is_mixed(&self) -> bool {
        self.entries.len() > 1
    }

    /// 檢查是否為零卡車分解
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 產生人類可讀摘要
    ///
    /// 格式如 "2 x Full Truck and 1 x LTL Truck"；
    /// 建議解析器可無損還原此格式
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return "No trucks required".to_string();
        }

        self.entries
            .iter()
            .map(|e| format!("{} x {} Truck", e.count, e.class.label()))
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// 單一類別的佔用率（顯示用，不持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyEntry {
    /// 卡車類別
    pub class: TruckClass,

    /// 每車分攤英尺
    pub per_truck_feet: Decimal,

    /// 佔用率（0..=1）
    pub occupancy_fraction: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_ordering_by_capacity() {
        assert!(TruckClass::Ltl < TruckClass::Half);
        assert!(TruckClass::Half < TruckClass::Full);
        assert_eq!(TruckClass::Full.capacity_feet(), Decimal::from(48));
    }

    #[test]
    fn test_from_entries_merges_duplicates() {
        let decomposition = Decomposition::from_entries([
            TruckAllocation::new(TruckClass::Full, 2),
            TruckAllocation::new(TruckClass::Ltl, 1),
            TruckAllocation::new(TruckClass::Full, 1),
        ]);

        // Full 合併為 3，首見順序保留
        assert_eq!(decomposition.entries().len(), 2);
        assert_eq!(decomposition.entries()[0].class, TruckClass::Full);
        assert_eq!(decomposition.entries()[0].count, 3);
        assert_eq!(decomposition.entries()[1].class, TruckClass::Ltl);
        assert_eq!(decomposition.total_trucks(), 4);
        assert!(decomposition.is_mixed());
    }

    #[test]
    fn test_merge_saturates_instead_of_overflowing() {
        // 惡意或損壞的輸入不得引發加法溢位
        let decomposition = Decomposition::from_entries([
            TruckAllocation::new(TruckClass::Full, u64::MAX),
            TruckAllocation::new(TruckClass::Full, 1),
            TruckAllocation::new(TruckClass::Ltl, u64::MAX),
            TruckAllocation::new(TruckClass::Ltl, u64::MAX),
        ]);

        assert_eq!(decomposition.entries()[0].count, u64::MAX);
        assert_eq!(decomposition.entries()[1].count, u64::MAX);
        assert_eq!(decomposition.total_trucks(), u64::MAX);
    }

    #[test]
    fn test_zero_count_entries_ignored() {
        let decomposition =
            Decomposition::from_entries([TruckAllocation::new(TruckClass::Half, 0)]);
        assert!(decomposition.is_empty());
    }

    #[test]
    fn test_summary_format() {
        let mixed = Decomposition::from_entries([
            TruckAllocation::new(TruckClass::Full, 2),
            TruckAllocation::new(TruckClass::Ltl, 1),
        ]);
        assert_eq!(mixed.summary(), "2 x Full Truck and 1 x LTL Truck");

        let single = Decomposition::from_entries([TruckAllocation::new(TruckClass::Half, 1)]);
        assert_eq!(single.summary(), "1 x Half Truck");

        assert_eq!(Decomposition::empty().summary(), "No trucks required");
    }
}
