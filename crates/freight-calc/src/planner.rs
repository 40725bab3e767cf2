//! 出貨計劃主計算器
//!
//! 串接整條管線：型錄查詢 → 棧板彙總 → 英尺估算 →
//! 卡車分解 → 佔用率分配。每次計算都從頭重算，
//! 不做增量修改，也不跨請求快取。

use rayon::prelude::*;
use rust_decimal::Decimal;

use freight_core::{Catalog, Decomposition, Item, ItemAttributes, ItemCategory, Result, Shipment};

use crate::aggregator::PalletAggregator;
use crate::decomposer::TruckDecomposer;
use crate::footage::{FootageBreakdown, FootageEstimator};
use crate::occupancy::OccupancyAllocator;
use crate::parser::RecommendationParser;
use crate::{PlanResult, PlanWarning};

/// 出貨計劃計算器
///
/// 型錄以注入的查詢能力提供，核心不持有全域狀態；
/// 不同出貨單之間無共享狀態，可安全並行
pub struct FreightPlanner<C: Catalog> {
    /// 型錄（外部協作者）
    catalog: C,
}

impl<C: Catalog> FreightPlanner<C> {
    /// 創建新的計算器
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// 主計算入口
    pub fn calculate(&self, shipment: &Shipment) -> Result<PlanResult> {
        tracing::info!("開始裝載計算：品項 {} 筆", shipment.len());
        let start_time = std::time::Instant::now();

        // Step 1: 型錄查詢與可裝載過濾
        tracing::debug!("Step 1: 型錄查詢");
        let (resolved, mut warnings) = self.resolve_items(shipment);
        tracing::debug!("可裝載品項: {} 筆", resolved.len());

        let total_weight_lbs = resolved
            .iter()
            .map(|(item, attributes)| attributes.total_weight_lbs(item.quantity))
            .sum();

        // Step 2: 棧板彙總
        tracing::debug!("Step 2: 棧板彙總");
        let aggregation = PalletAggregator::aggregate(&resolved);
        warnings.extend(aggregation.warnings);
        tracing::debug!("棧板群組: {} 組", aggregation.groups.len());

        // Step 3: 線性英尺估算
        tracing::debug!("Step 3: 線性英尺估算");
        let breakdown = FootageEstimator::estimate(&aggregation.groups);
        tracing::debug!("總線性英尺: {}", breakdown.total_linear_feet);

        // Step 4: 卡車分解
        tracing::debug!("Step 4: 卡車分解");
        let decomposition = TruckDecomposer::decompose(breakdown.total_linear_feet)?;
        let summary = decomposition.summary();

        // Step 5: 佔用率分配
        tracing::debug!("Step 5: 佔用率分配");
        let occupancy =
            OccupancyAllocator::allocate(&decomposition, breakdown.total_linear_feet)?;

        let mut result = PlanResult::empty();
        result.total_linear_feet = breakdown.total_linear_feet;
        result.total_weight_lbs = total_weight_lbs;
        result.breakdown = breakdown;
        result.decomposition = decomposition;
        result.summary = summary;
        result.occupancy = occupancy;
        result.warnings = warnings;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("裝載計算完成，耗時 {:?}：{}", start_time.elapsed(), result.summary);

        Ok(result)
    }

    /// 只計算英尺：回傳明細與過濾過程的警告
    pub fn compute_footage(
        &self,
        shipment: &Shipment,
    ) -> Result<(FootageBreakdown, Vec<PlanWarning>)> {
        let (resolved, mut warnings) = self.resolve_items(shipment);
        let aggregation = PalletAggregator::aggregate(&resolved);
        warnings.extend(aggregation.warnings);
        Ok((FootageEstimator::estimate(&aggregation.groups), warnings))
    }

    /// 批次計算多張獨立出貨單（rayon 並行）
    pub fn calculate_batch(&self, shipments: &[Shipment]) -> Vec<Result<PlanResult>>
    where
        C: Sync,
    {
        shipments
            .par_iter()
            .map(|shipment| self.calculate(shipment))
            .collect()
    }

    /// 文字回復路徑：從敘述句重建出貨計劃
    ///
    /// 僅在無法重算、只剩先前渲染的敘述時使用；
    /// 結構化分解仍應盡量端到端傳遞（相容墊片）。
    /// 未提供總英尺時，以各類別滿載容量分攤
    /// （Σ count × capacity，最保守的顯示）。
    pub fn recover_from_narrative(
        &self,
        narrative: &str,
        total_linear_feet: Option<Decimal>,
    ) -> Result<PlanResult> {
        let entries = RecommendationParser::parse(narrative);
        let decomposition = Decomposition::from_entries(entries);

        let total = total_linear_feet.unwrap_or_else(|| {
            decomposition
                .entries()
                .iter()
                .map(|e| Decimal::from(e.count) * e.class.capacity_feet())
                .sum()
        });

        let occupancy = OccupancyAllocator::allocate(&decomposition, total)?;

        let mut result = PlanResult::empty();
        result.total_linear_feet = total;
        result.summary = decomposition.summary();
        result.decomposition = decomposition;
        result.occupancy = occupancy;

        Ok(result)
    }

    /// 型錄查詢與過濾
    ///
    /// 找不到屬性或缺少裝載幾何的品項回報警告後跳過
    /// （交由外部估算路徑）；排除類別靜默通過到彙總階段
    fn resolve_items(&self, shipment: &Shipment) -> (Vec<(Item, ItemAttributes)>, Vec<PlanWarning>) {
        let mut resolved = Vec::new();
        let mut warnings = Vec::new();

        for item in shipment.items() {
            let attributes = match self.catalog.lookup(&item.key) {
                Some(attributes) => attributes,
                None => {
                    warnings.push(PlanWarning::warning(
                        item.key.clone(),
                        format!("找不到品項屬性: {}", item.key),
                    ));
                    continue;
                }
            };

            if attributes.category != ItemCategory::Excluded && !attributes.is_packable() {
                warnings.push(PlanWarning::warning(
                    item.key.clone(),
                    format!("品項 {} 缺少裝載幾何屬性，跳過確定性路徑", item.key),
                ));
                continue;
            }

            resolved.push((item.clone(), attributes));
        }

        (resolved, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_core::{MemoryCatalog, TruckClass};

    fn test_catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_item(
                "CARPET-ROLL-12",
                ItemAttributes::new(ItemCategory::RollGood)
                    .with_weight_lbs(Decimal::from(220))
                    .with_rolls_per_pallet(4)
                    .with_pallet_length_feet(Decimal::from(12)),
            )
            .with_item(
                "VINYL-PLANK-BOX",
                ItemAttributes::new(ItemCategory::BoardGood)
                    .with_weight_lbs(Decimal::from(45))
                    .with_units_per_pallet(40)
                    .with_pallet_length_feet(Decimal::from(4)),
            )
            .with_item(
                "ADHESIVE-PAIL",
                ItemAttributes::new(ItemCategory::Accessory)
                    .with_weight_lbs(Decimal::from(30))
                    .with_units_per_pallet(24),
            )
            .with_item(
                "SAMPLE-SWATCH",
                ItemAttributes::new(ItemCategory::Excluded).with_weight_lbs(Decimal::ONE),
            )
    }

    #[test]
    fn test_full_pipeline() {
        let planner = FreightPlanner::new(test_catalog());

        // 16 捲 → 4 棧板 → 1 槽位 × 12 英尺
        // 40 盒 → 1 棧板 → 1 槽位 × 4 英尺
        // 共 16 英尺 → Half
        let shipment = Shipment::from_iter([
            Item::new("CARPET-ROLL-12", 16),
            Item::new("VINYL-PLANK-BOX", 40),
        ]);

        let result = planner.calculate(&shipment).unwrap();

        assert_eq!(result.total_linear_feet, Decimal::from(16));
        assert_eq!(result.decomposition.entries().len(), 1);
        assert_eq!(result.decomposition.entries()[0].class, TruckClass::Half);
        assert_eq!(result.summary, "1 x Half Truck");
        assert!(result.warnings.is_empty());
        assert!(result.calculation_time_ms.is_some());

        // 重量：16×220 + 40×45 = 5320
        assert_eq!(result.total_weight_lbs, Decimal::from(5320));
    }

    #[test]
    fn test_unknown_key_warns_and_continues() {
        let planner = FreightPlanner::new(test_catalog());
        let shipment = Shipment::from_iter([
            Item::new("NO-SUCH-KEY", 5),
            Item::new("ADHESIVE-PAIL", 10),
        ]);

        let result = planner.calculate(&shipment).unwrap();

        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].item_key, "NO-SUCH-KEY");
        // 配件 1 棧板 → 4 英尺 → LTL
        assert_eq!(result.total_linear_feet, Decimal::from(4));
        assert_eq!(result.decomposition.entries()[0].class, TruckClass::Ltl);
    }

    #[test]
    fn test_all_excluded_yields_zero_truck_plan() {
        let planner = FreightPlanner::new(test_catalog());
        let shipment = Shipment::from_iter([Item::new("SAMPLE-SWATCH", 100)]);

        let result = planner.calculate(&shipment).unwrap();

        assert_eq!(result.total_linear_feet, Decimal::ZERO);
        assert!(result.decomposition.is_empty());
        assert!(result.occupancy.is_empty());
        assert_eq!(result.summary, "No trucks required");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_shipment_is_terminal_not_error() {
        let planner = FreightPlanner::new(test_catalog());
        let result = planner.calculate(&Shipment::new()).unwrap();

        assert_eq!(result.total_linear_feet, Decimal::ZERO);
        assert!(result.decomposition.is_empty());
    }

    #[test]
    fn test_batch_matches_single() {
        let planner = FreightPlanner::new(test_catalog());
        let shipments = vec![
            Shipment::from_iter([Item::new("CARPET-ROLL-12", 16)]),
            Shipment::from_iter([Item::new("ADHESIVE-PAIL", 10)]),
        ];

        let batch = planner.calculate_batch(&shipments);

        assert_eq!(batch.len(), 2);
        for (shipment, result) in shipments.iter().zip(&batch) {
            let single = planner.calculate(shipment).unwrap();
            let result = result.as_ref().unwrap();
            assert_eq!(result.total_linear_feet, single.total_linear_feet);
            assert_eq!(result.decomposition, single.decomposition);
        }
    }

    #[test]
    fn test_recover_from_narrative_with_total() {
        let planner = FreightPlanner::new(test_catalog());
        let result = planner
            .recover_from_narrative("2 Full Truck(s) and 1 LTL", Some(Decimal::from(100)))
            .unwrap();

        assert_eq!(result.decomposition.total_trucks(), 3);
        assert_eq!(result.total_linear_feet, Decimal::from(100));
        assert_eq!(result.occupancy.len(), 2);
    }

    #[test]
    fn test_recover_without_total_assumes_full_capacity() {
        let planner = FreightPlanner::new(test_catalog());
        let result = planner.recover_from_narrative("1 Half Truck", None).unwrap();

        // 24 英尺滿載 → 佔用率 1
        assert_eq!(result.total_linear_feet, Decimal::from(24));
        assert_eq!(result.occupancy[0].occupancy_fraction, Decimal::ONE);
    }
}
