//! 棧板彙總
//!
//! 將品項數量依類別裝載率換算為棧板數，
//! 並以（類別、棧板長度）分桶累計。

use std::collections::HashMap;

use freight_core::{FreightError, Item, ItemAttributes, ItemCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PlanWarning;

/// 配件併板的固定名義棧板長度（英尺）
pub const ACCESSORY_PALLET_LENGTH_FEET: u32 = 4;

/// 棧板群組鍵（類別 × 棧板長度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PalletGroupKey {
    /// 裝載類別
    pub category: ItemCategory,

    /// 棧板長度（英尺）
    pub pallet_length_feet: Decimal,
}

impl PalletGroupKey {
    /// 創建新的群組鍵
    pub fn new(category: ItemCategory, pallet_length_feet: Decimal) -> Self {
        Self {
            category,
            pallet_length_feet,
        }
    }
}

/// 棧板群組集合
///
/// 群組對可裝載品項構成一個劃分：同一品項不會貢獻到多個群組
#[derive(Debug, Clone, Default)]
pub struct PalletGroups {
    groups: HashMap<PalletGroupKey, u64>,
}

impl PalletGroups {
    /// 創建空的群組集合
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// 累計棧板數到指定群組
    pub fn add(&mut self, key: PalletGroupKey, pallet_count: u64) {
        *self.groups.entry(key).or_insert(0) += pallet_count;
    }

    /// 取得指定群組的棧板數
    pub fn get(&self, key: &PalletGroupKey) -> u64 {
        self.groups.get(key).copied().unwrap_or(0)
    }

    /// 群組迭代器（無順序保證）
    pub fn iter(&self) -> impl Iterator<Item = (&PalletGroupKey, u64)> {
        self.groups.iter().map(|(key, &count)| (key, count))
    }

    /// 群組數
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// 檢查是否為空
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 總棧板數
    pub fn total_pallets(&self) -> u64 {
        self.groups.values().sum()
    }
}

/// 棧板彙總結果
#[derive(Debug, Clone)]
pub struct PalletAggregation {
    /// 棧板群組
    pub groups: PalletGroups,

    /// 被跳過品項的警告（無效裝載率等，回報但不中斷）
    pub warnings: Vec<PlanWarning>,
}

/// 棧板彙總計算器
pub struct PalletAggregator;

impl PalletAggregator {
    /// 彙總品項為棧板群組
    ///
    /// 輸入應已過濾為可裝載子集；排除類別在此一律不產生英尺。
    /// 裝載率為零或負值屬外部資料缺陷，該品項回報
    /// `InvalidPackingRate` 警告後跳過，整張出貨單的計算繼續。
    pub fn aggregate(items: &[(Item, ItemAttributes)]) -> PalletAggregation {
        let mut groups = PalletGroups::new();
        let mut warnings = Vec::new();

        for (item, attributes) in items {
            if attributes.category == ItemCategory::Excluded {
                tracing::debug!("品項 {} 為排除類別，不佔用車廂空間", item.key);
                continue;
            }

            let rate = match attributes.packing_rate() {
                Some(rate) => rate,
                None => {
                    tracing::debug!("品項 {} 缺少裝載率，跳過確定性路徑", item.key);
                    continue;
                }
            };

            if rate <= 0 {
                let error = FreightError::InvalidPackingRate {
                    item_key: item.key.clone(),
                    rate,
                };
                warnings.push(PlanWarning::warning(item.key.clone(), error.to_string()));
                continue;
            }

            let key = match Self::group_key(attributes) {
                Some(key) => key,
                None => {
                    tracing::debug!("品項 {} 缺少棧板長度，跳過確定性路徑", item.key);
                    continue;
                }
            };

            let pallet_count = Self::pallets_for_item(item.quantity, rate as u64);
            groups.add(key, pallet_count);
        }

        PalletAggregation { groups, warnings }
    }

    /// 單一品項所需棧板數：ceil(quantity / rate)
    fn pallets_for_item(quantity: u32, rate: u64) -> u64 {
        (u64::from(quantity) + rate - 1) / rate
    }

    /// 決定品項的群組鍵
    ///
    /// 配件一律併板至固定 4 英尺名義棧板
    fn group_key(attributes: &ItemAttributes) -> Option<PalletGroupKey> {
        match attributes.category {
            ItemCategory::Accessory => Some(PalletGroupKey::new(
                ItemCategory::Accessory,
                Decimal::from(ACCESSORY_PALLET_LENGTH_FEET),
            )),
            category => attributes
                .pallet_length_feet
                .map(|length| PalletGroupKey::new(category, length)),
        }
    }
}
