//! # Freight Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod item;
pub mod truck;

// Re-export 主要類型
pub use catalog::{Catalog, MemoryCatalog};
pub use item::{Item, ItemAttributes, ItemCategory, Shipment};
pub use truck::{Decomposition, OccupancyEntry, TruckAllocation, TruckClass};

use rust_decimal::Decimal;

/// 裝載計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum FreightError {
    #[error("無效的裝載率: 品項 {item_key} 的每棧板單位數為 {rate}")]
    InvalidPackingRate { item_key: String, rate: i64 },

    #[error("找不到品項屬性: {0}")]
    AttributesNotFound(String),

    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("空的卡車分解，但總線性英尺為 {0}")]
    EmptyDecomposition(Decimal),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FreightError>;
