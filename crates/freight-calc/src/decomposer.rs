//! 卡車分解
//!
//! 將總線性英尺映射為卡車類別與車輛數。
//! 固定的貪婪策略：先裝滿整車，餘量交給單一溢出車，
//! 不做最小車數的組合搜尋。

use freight_core::{Decomposition, FreightError, Result, TruckAllocation, TruckClass};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// 卡車分解器
pub struct TruckDecomposer;

impl TruckDecomposer {
    /// 分解總線性英尺為卡車配置
    ///
    /// 策略：
    /// 1. `full = floor(total / 48)`，`rem = total mod 48`
    /// 2. 餘量分類：`rem == 0` → 無溢出；`0 < rem < 14` → LTL；
    ///    `14 ≤ rem ≤ 24` → Half；`rem > 24` → 折入整車數
    ///    （多一台整車，不產生第二筆混合項）
    /// 3. 整車數 > 0 且有 LTL/Half 溢出 → 混合分解
    /// 4. `total == 0` → 零卡車終端結果（「無出貨」，非錯誤）
    ///
    /// 邊界值：14.0 → Half（非 LTL）；24.0 → Half（非 Full）；
    /// 48.0 → 餘量為零（純整車，非混合）。
    ///
    /// 負值輸入回傳 `InvalidInput`；純函數，重複呼叫結果一致。
    pub fn decompose(total_linear_feet: Decimal) -> Result<Decomposition> {
        if total_linear_feet < Decimal::ZERO {
            return Err(FreightError::InvalidInput(format!(
                "總線性英尺不可為負值: {}",
                total_linear_feet
            )));
        }

        if total_linear_feet.is_zero() {
            return Ok(Decomposition::empty());
        }

        let full_capacity = TruckClass::Full.capacity_feet();
        // 對有限非負輸入必須構成全序：整車數超出 u64 的極端輸入
        // 飽和於上限而非回傳錯誤
        let mut full_trucks = (total_linear_feet / full_capacity)
            .floor()
            .to_u64()
            .unwrap_or(u64::MAX);

        let remainder = total_linear_feet - Decimal::from(full_trucks) * full_capacity;

        // 餘量分類；rem > 24 只會出現在浮點殘差貼近 48 的情形，
        // 折入整車數而非當作新的混合項
        let overflow_class = if remainder.is_zero() {
            None
        } else if remainder < TruckClass::Ltl.capacity_feet() {
            Some(TruckClass::Ltl)
        } else if remainder <= TruckClass::Half.capacity_feet() {
            Some(TruckClass::Half)
        } else {
            full_trucks = full_trucks.saturating_add(1);
            None
        };

        let decomposition = match (full_trucks, overflow_class) {
            (0, Some(class)) => {
                Decomposition::from_entries([TruckAllocation::new(class, 1)])
            }
            (full, None) => {
                Decomposition::from_entries([TruckAllocation::new(TruckClass::Full, full)])
            }
            (full, Some(class)) => Decomposition::from_entries([
                TruckAllocation::new(TruckClass::Full, full),
                TruckAllocation::new(class, 1),
            ]),
        };

        tracing::debug!(
            "卡車分解: {} 英尺 → {}",
            total_linear_feet,
            decomposition.summary()
        );

        Ok(decomposition)
    }

    /// f64 邊界入口
    ///
    /// NaN、無窮大與負值回傳 `InvalidInput`；
    /// 轉為 Decimal 正規化後再走 [`Self::decompose`]
    pub fn decompose_feet(total_linear_feet: f64) -> Result<Decomposition> {
        let total = Decimal::from_f64(total_linear_feet).ok_or_else(|| {
            FreightError::InvalidInput(format!(
                "總線性英尺必須為有限數值: {}",
                total_linear_feet
            ))
        })?;

        Self::decompose(total)
    }
}
