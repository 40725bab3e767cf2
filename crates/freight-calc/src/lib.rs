//! # Freight Calculation Engine
//!
//! 核心裝載計算引擎：棧板彙總 → 線性英尺估算 → 卡車分解 → 佔用率分配

pub mod aggregator;
pub mod decomposer;
pub mod footage;
pub mod occupancy;
pub mod parser;
pub mod planner;

// Re-export 主要類型
pub use aggregator::{PalletAggregation, PalletAggregator, PalletGroupKey, PalletGroups};
pub use decomposer::TruckDecomposer;
pub use footage::{FootageBreakdown, FootageEstimator, GroupFootage};
pub use occupancy::OccupancyAllocator;
pub use parser::RecommendationParser;
pub use planner::FreightPlanner;

use freight_core::{Decomposition, OccupancyEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 出貨計劃計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    /// 計劃ID
    pub id: Uuid,

    /// 總線性英尺（內部全精度）
    pub total_linear_feet: Decimal,

    /// 總重量（磅）
    pub total_weight_lbs: Decimal,

    /// 各棧板群組的英尺明細
    pub breakdown: FootageBreakdown,

    /// 卡車分解（權威的結構化形式）
    pub decomposition: Decomposition,

    /// 人類可讀摘要（敘述輸出用）
    pub summary: String,

    /// 各類別佔用率
    pub occupancy: Vec<OccupancyEntry>,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            total_linear_feet: Decimal::ZERO,
            total_weight_lbs: Decimal::ZERO,
            breakdown: FootageBreakdown::empty(),
            decomposition: Decomposition::empty(),
            summary: String::new(),
            occupancy: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    /// 顯示用總英尺（保證至少 2 位小數精度）
    pub fn total_display(&self) -> Decimal {
        self.total_linear_feet.round_dp(2)
    }
}

/// 計劃警告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWarning {
    pub item_key: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(item_key: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            item_key,
            message,
            severity,
        }
    }

    pub fn info(item_key: String, message: String) -> Self {
        Self::new(item_key, message, WarningSeverity::Info)
    }

    pub fn warning(item_key: String, message: String) -> Self {
        Self::new(item_key, message, WarningSeverity::Warning)
    }

    pub fn error(item_key: String, message: String) -> Self {
        Self::new(item_key, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
