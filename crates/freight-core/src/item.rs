//! 品項與出貨模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 裝載類別
///
/// 決定品項適用的棧板裝載規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemCategory {
    /// 捲材（以每棧板捲數裝載）
    RollGood,
    /// 板材（以每棧板單位數裝載）
    BoardGood,
    /// 配件（併板至固定 4 英尺棧板）
    Accessory,
    /// 排除（不佔用車廂空間）
    Excluded,
}

/// 出貨品項
///
/// 身分以型錄鍵值（key）識別；加入出貨單後不可變
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// 型錄鍵值（外部型錄的不透明參照）
    pub key: String,

    /// 出貨數量
    pub quantity: u32,
}

impl Item {
    /// 創建新的出貨品項
    pub fn new(key: impl Into<String>, quantity: u32) -> Self {
        Self {
            key: key.into(),
            quantity,
        }
    }
}

/// 出貨單
///
/// 品項的有序序列；順序只影響顯示，不影響計算。
/// 僅存在於工作階段內，不做持久化。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shipment {
    items: Vec<Item>,
}

impl Shipment {
    /// 創建空的出貨單
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 加入品項（附加到序列尾端）
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// 移除指定鍵值的所有品項
    pub fn remove_item(&mut self, key: &str) {
        self.items.retain(|item| item.key != key);
    }

    /// 品項序列
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// 檢查是否為空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 品項筆數
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl FromIterator<Item> for Shipment {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// 品項物理屬性（來自外部型錄）
///
/// 裝載率欄位依類別而定：捲材用 `rolls_per_pallet`，
/// 板材與配件用 `units_per_pallet`。外部資料可能帶有
/// 零或負值的裝載率，屬資料缺陷，由彙總階段回報。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttributes {
    /// 裝載類別
    pub category: ItemCategory,

    /// 單件重量（磅）
    pub weight_lbs: Decimal,

    /// 每棧板捲數（捲材）
    pub rolls_per_pallet: Option<i64>,

    /// 每棧板單位數（板材、配件）
    pub units_per_pallet: Option<i64>,

    /// 棧板長度（英尺）
    pub pallet_length_feet: Option<Decimal>,
}

impl ItemAttributes {
    /// 創建新的品項屬性
    pub fn new(category: ItemCategory) -> Self {
        Self {
            category,
            weight_lbs: Decimal::ZERO,
            rolls_per_pallet: None,
            units_per_pallet: None,
            pallet_length_feet: None,
        }
    }

    /// 建構器模式：設置單件重量
    pub fn with_weight_lbs(mut self, weight_lbs: Decimal) -> Self {
        self.weight_lbs = weight_lbs;
        self
    }

    /// 建構器模式：設置每棧板捲數
    pub fn with_rolls_per_pallet(mut self, rolls: i64) -> Self {
        self.rolls_per_pallet = Some(rolls);
        self
    }

    /// 建構器模式：設置每棧板單位數
    pub fn with_units_per_pallet(mut self, units: i64) -> Self {
        self.units_per_pallet = Some(units);
        self
    }

    /// 建構器模式：設置棧板長度
    pub fn with_pallet_length_feet(mut self, length: Decimal) -> Self {
        self.pallet_length_feet = Some(length);
        self
    }

    /// 取得該類別適用的裝載率
    pub fn packing_rate(&self) -> Option<i64> {
        match self.category {
            ItemCategory::RollGood => self.rolls_per_pallet,
            ItemCategory::BoardGood | ItemCategory::Accessory => self.units_per_pallet,
            ItemCategory::Excluded => None,
        }
    }

    /// 檢查是否可由確定性路徑裝載
    ///
    /// 捲材與板材需要裝載率與棧板長度；配件只需裝載率
    /// （併板至固定 4 英尺棧板）；排除類別一律不可裝載。
    pub fn is_packable(&self) -> bool {
        match self.category {
            ItemCategory::RollGood | ItemCategory::BoardGood => {
                self.packing_rate().is_some() && self.pallet_length_feet.is_some()
            }
            ItemCategory::Accessory => self.packing_rate().is_some(),
            ItemCategory::Excluded => false,
        }
    }

    /// 計算指定數量的總重量（磅）
    pub fn total_weight_lbs(&self, quantity: u32) -> Decimal {
        self.weight_lbs * Decimal::from(quantity)
    }
}
