//! 線性英尺估算
//!
//! 依堆疊密度規則將棧板群組換算為車廂地板長度：
//! 同長度棧板可並排兩列、堆疊兩層，即每個地板槽位
//! 最多容納 4 個同長度棧板；不同長度不共用槽位。

use freight_core::ItemCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregator::PalletGroups;

/// 每個地板槽位可容納的同長度棧板數（2 寬 × 2 高）
pub const PALLETS_PER_FLOOR_SLOT: u64 = 4;

/// 單一群組的英尺明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupFootage {
    /// 裝載類別
    pub category: ItemCategory,

    /// 棧板長度（英尺）
    pub pallet_length_feet: Decimal,

    /// 棧板數
    pub pallet_count: u64,

    /// 地板槽位數：ceil(pallet_count / 4)
    pub floor_slots: u64,

    /// 佔用英尺：floor_slots × 棧板長度
    pub feet: Decimal,
}

/// 英尺估算結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootageBreakdown {
    /// 總線性英尺（內部全精度）
    pub total_linear_feet: Decimal,

    /// 各群組明細，依（類別、長度）排序以確保輸出穩定
    pub groups: Vec<GroupFootage>,
}

impl FootageBreakdown {
    /// 創建空的估算結果（零可裝載品項的終端情形）
    pub fn empty() -> Self {
        Self {
            total_linear_feet: Decimal::ZERO,
            groups: Vec::new(),
        }
    }

    /// 顯示用總英尺（2 位小數）
    pub fn total_display(&self) -> Decimal {
        self.total_linear_feet.round_dp(2)
    }
}

/// 線性英尺估算器
pub struct FootageEstimator;

impl FootageEstimator {
    /// 估算棧板群組的總線性英尺
    pub fn estimate(groups: &PalletGroups) -> FootageBreakdown {
        let mut group_footages: Vec<GroupFootage> = groups
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(key, count)| {
                let floor_slots = Self::floor_slots(count);
                let feet = Decimal::from(floor_slots) * key.pallet_length_feet;
                GroupFootage {
                    category: key.category,
                    pallet_length_feet: key.pallet_length_feet,
                    pallet_count: count,
                    floor_slots,
                    feet,
                }
            })
            .collect();

        group_footages.sort_by(|a, b| {
            (a.category, a.pallet_length_feet).cmp(&(b.category, b.pallet_length_feet))
        });

        let total_linear_feet = group_footages.iter().map(|g| g.feet).sum();

        FootageBreakdown {
            total_linear_feet,
            groups: group_footages,
        }
    }

    /// 所需地板槽位數：ceil(pallet_count / 4)
    pub fn floor_slots(pallet_count: u64) -> u64 {
        (pallet_count + PALLETS_PER_FLOOR_SLOT - 1) / PALLETS_PER_FLOOR_SLOT
    }

    /// 單一群組佔用英尺：ceil(pallet_count / 4) × 長度
    pub fn feet_for_group(pallet_count: u64, pallet_length_feet: Decimal) -> Decimal {
        Decimal::from(Self::floor_slots(pallet_count)) * pallet_length_feet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::PalletGroupKey;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(4, 1)]
    #[case(5, 2)]
    #[case(8, 2)]
    #[case(9, 3)]
    fn test_floor_slots(#[case] pallets: u64, #[case] expected_slots: u64) {
        assert_eq!(FootageEstimator::floor_slots(pallets), expected_slots);
    }

    #[test]
    fn test_feet_for_group() {
        // 5 個 12 英尺棧板 → 2 槽位 → 24 英尺
        assert_eq!(
            FootageEstimator::feet_for_group(5, Decimal::from(12)),
            Decimal::from(24)
        );
    }

    #[test]
    fn test_different_lengths_never_share_slots() {
        // 各 1 個 12 英尺與 15 英尺棧板：各佔一個槽位，共 27 英尺
        let mut groups = PalletGroups::new();
        groups.add(
            PalletGroupKey::new(ItemCategory::RollGood, Decimal::from(12)),
            1,
        );
        groups.add(
            PalletGroupKey::new(ItemCategory::RollGood, Decimal::from(15)),
            1,
        );

        let breakdown = FootageEstimator::estimate(&groups);
        assert_eq!(breakdown.total_linear_feet, Decimal::from(27));
        assert_eq!(breakdown.groups.len(), 2);
    }

    #[test]
    fn test_accessory_four_foot_rule() {
        // 6 個配件棧板 → 2 槽位 × 4 英尺 = 8 英尺
        let mut groups = PalletGroups::new();
        groups.add(
            PalletGroupKey::new(ItemCategory::Accessory, Decimal::from(4)),
            6,
        );

        let breakdown = FootageEstimator::estimate(&groups);
        assert_eq!(breakdown.total_linear_feet, Decimal::from(8));
    }

    #[test]
    fn test_empty_groups_yield_exact_zero() {
        let breakdown = FootageEstimator::estimate(&PalletGroups::new());
        assert_eq!(breakdown.total_linear_feet, Decimal::ZERO);
        assert!(breakdown.groups.is_empty());
    }

    #[test]
    fn test_breakdown_sorted_deterministically() {
        let mut groups = PalletGroups::new();
        groups.add(
            PalletGroupKey::new(ItemCategory::Accessory, Decimal::from(4)),
            1,
        );
        groups.add(
            PalletGroupKey::new(ItemCategory::RollGood, Decimal::from(15)),
            1,
        );
        groups.add(
            PalletGroupKey::new(ItemCategory::RollGood, Decimal::from(12)),
            1,
        );

        let breakdown = FootageEstimator::estimate(&groups);
        let order: Vec<_> = breakdown
            .groups
            .iter()
            .map(|g| (g.category, g.pallet_length_feet))
            .collect();

        assert_eq!(
            order,
            vec![
                (ItemCategory::RollGood, Decimal::from(12)),
                (ItemCategory::RollGood, Decimal::from(15)),
                (ItemCategory::Accessory, Decimal::from(4)),
            ]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // feet(p, L) 對棧板數單調不減
            #[test]
            fn footage_monotonic_in_pallet_count(p in 0u64..10_000, l in 1i64..64) {
                let length = Decimal::from(l);
                let feet_p = FootageEstimator::feet_for_group(p, length);
                let feet_p1 = FootageEstimator::feet_for_group(p + 1, length);
                prop_assert!(feet_p1 >= feet_p);
            }

            // feet(p, L) = ceil(p/4) × L
            #[test]
            fn footage_matches_ceiling_formula(p in 0u64..10_000, l in 1i64..64) {
                let expected = Decimal::from((p + 3) / 4) * Decimal::from(l);
                prop_assert_eq!(
                    FootageEstimator::feet_for_group(p, Decimal::from(l)),
                    expected
                );
            }
        }
    }
}
