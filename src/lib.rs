//! # Freight
//!
//! 出貨裝載計算引擎：將品項清單換算為出貨計劃
//! （佔用的車廂線性英尺、所需卡車類別與車數、佔用率）。
//!
//! - [`freight_core`] — 核心資料模型與型錄介面
//! - [`freight_calc`] — 計算管線（彙總、估算、分解、解析、分配）
//!
//! ```
//! use freight::{FreightPlanner, Item, ItemAttributes, ItemCategory, MemoryCatalog, Shipment};
//! use rust_decimal::Decimal;
//!
//! let catalog = MemoryCatalog::new().with_item(
//!     "CARPET-ROLL-12",
//!     ItemAttributes::new(ItemCategory::RollGood)
//!         .with_rolls_per_pallet(4)
//!         .with_pallet_length_feet(Decimal::from(12)),
//! );
//!
//! let mut shipment = Shipment::new();
//! shipment.add_item(Item::new("CARPET-ROLL-12", 16));
//!
//! let planner = FreightPlanner::new(catalog);
//! let plan = planner.calculate(&shipment).unwrap();
//! assert_eq!(plan.total_linear_feet, Decimal::from(12));
//! ```

pub use freight_core::{
    Catalog, Decomposition, FreightError, Item, ItemAttributes, ItemCategory, MemoryCatalog,
    OccupancyEntry, Result, Shipment, TruckAllocation, TruckClass,
};

pub use freight_calc::{
    FootageBreakdown, FootageEstimator, FreightPlanner, GroupFootage, OccupancyAllocator,
    PalletAggregation, PalletAggregator, PalletGroupKey, PalletGroups, PlanResult, PlanWarning,
    RecommendationParser, TruckDecomposer, WarningSeverity,
};
