// ==========================================
// Right-to-Repair 备件责任预测 - 责任与采购规划器
// ==========================================
// 输入: 失效预测序列 + 库存衰减策略 + 单价 + 报废率假设
// 输出: GapAnalysis (回填库存/缺口的序列 + 峰值缺口 + 资本指标)
// ==========================================
// 红线: 无状态；库存策略返回负值或 NaN 时按 0 处理
// ==========================================

use crate::domain::error::{ensure_fraction, ensure_non_negative, ForecastError, ForecastResult};
use crate::domain::forecast::ForecastPoint;
use crate::domain::procurement::GapAnalysis;
use crate::domain::types::ProcurementUrgency;
use crate::engine::inventory_decay::InventoryDecayPolicy;
use tracing::instrument;

// ==========================================
// LiabilityPlanner - 责任楔形规划器
// ==========================================
pub struct LiabilityPlanner {
    // 无状态引擎，不需要注入依赖
}

impl Default for LiabilityPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LiabilityPlanner {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 缺口分析
    ///
    /// # 参数
    /// - `points`: 失效预测序列（通常来自 FailureForecastEngine）
    /// - `policy`: 库存衰减策略
    /// - `unit_cost`: 部件单价，≥ 0
    /// - `scrap_rate_assumption`: 报废率假设，∈ [0, 1]
    ///
    /// # 返回
    /// - Ok(GapAnalysis)
    /// - Err(ForecastError::InvalidParameter): 单价/报废率越界或序列为空
    #[instrument(skip(self, points, policy))]
    pub fn compute_gap_series<I, P>(
        &self,
        points: I,
        policy: &P,
        unit_cost: f64,
        scrap_rate_assumption: f64,
    ) -> ForecastResult<GapAnalysis>
    where
        I: IntoIterator<Item = ForecastPoint>,
        P: InventoryDecayPolicy + ?Sized,
    {
        ensure_non_negative("unit_cost", unit_cost)?;
        ensure_fraction("scrap_rate_assumption", scrap_rate_assumption)?;

        // 1. 回填可用库存与缺口
        let series: Vec<ForecastPoint> = points
            .into_iter()
            .map(|point| self.apply_inventory(point, policy))
            .collect();

        if series.is_empty() {
            return Err(ForecastError::invalid("points", 0.0, "预测序列不能为空"));
        }

        // 2. 峰值缺口（并列取最早）
        let (max_gap, max_gap_time) = self.peak_gap(&series);

        // 3. 资本指标
        let total_parts_required = series
            .iter()
            .map(|p| p.parts_required)
            .fold(f64::NEG_INFINITY, f64::max);
        let capital_lockup = total_parts_required * unit_cost;
        let scrap_risk = capital_lockup * scrap_rate_assumption;

        // 4. 紧迫度
        let gap_pct = if total_parts_required > 0.0 {
            max_gap / total_parts_required * 100.0
        } else {
            0.0
        };
        let urgency = ProcurementUrgency::from_gap_pct(gap_pct);

        tracing::info!(
            points = series.len(),
            max_gap,
            max_gap_time,
            total_parts_required,
            capital_lockup,
            urgency = %urgency,
            "缺口分析完成"
        );

        Ok(GapAnalysis {
            series,
            max_gap,
            max_gap_time,
            total_parts_required,
            capital_lockup,
            scrap_risk,
            gap_pct,
            urgency,
        })
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 回填单点库存与缺口
    fn apply_inventory<P>(&self, mut point: ForecastPoint, policy: &P) -> ForecastPoint
    where
        P: InventoryDecayPolicy + ?Sized,
    {
        let raw = policy.available_inventory(point.t_years, point.parts_required);
        let available = if raw >= 0.0 {
            raw
        } else {
            tracing::warn!(t_years = point.t_years, raw, "库存策略返回非法值，按 0 处理");
            0.0
        };

        point.available_inventory = available;
        point.gap = point.parts_required - available;
        point
    }

    /// 最大缺口及其时刻
    fn peak_gap(&self, series: &[ForecastPoint]) -> (f64, f64) {
        let mut best = (series[0].gap, series[0].t_years);
        for point in &series[1..] {
            if point.gap > best.0 {
                best = (point.gap, point.t_years);
            }
        }
        best
    }
}

/// 使用默认规划器的缺口分析
pub fn compute_gap_series<I, P>(
    points: I,
    policy: &P,
    unit_cost: f64,
    scrap_rate_assumption: f64,
) -> ForecastResult<GapAnalysis>
where
    I: IntoIterator<Item = ForecastPoint>,
    P: InventoryDecayPolicy + ?Sized,
{
    LiabilityPlanner::new().compute_gap_series(points, policy, unit_cost, scrap_rate_assumption)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(t: f64, req: f64) -> ForecastPoint {
        ForecastPoint {
            t_years: t,
            cumulative_failure_fraction: 0.0,
            expected_failures: req,
            parts_required: req,
            available_inventory: 0.0,
            gap: req,
        }
    }

    #[test]
    fn test_negative_inventory_clamped() {
        let broken = |_t: f64, _req: f64| -50.0;
        let analysis = compute_gap_series(vec![point(0.0, 10.0)], &broken, 1.0, 0.15).unwrap();
        assert_eq!(analysis.series[0].available_inventory, 0.0);
        assert_eq!(analysis.series[0].gap, 10.0);
    }

    #[test]
    fn test_nan_inventory_clamped() {
        let broken = |_t: f64, _req: f64| f64::NAN;
        let analysis = compute_gap_series(vec![point(0.0, 10.0)], &broken, 1.0, 0.15).unwrap();
        assert_eq!(analysis.series[0].available_inventory, 0.0);
    }

    #[test]
    fn test_peak_tie_takes_earliest() {
        let none = |_t: f64, _req: f64| 0.0;
        let points = vec![point(0.0, 1.0), point(1.0, 5.0), point(2.0, 5.0)];
        let analysis = compute_gap_series(points, &none, 1.0, 0.15).unwrap();
        assert_eq!(analysis.max_gap, 5.0);
        assert_eq!(analysis.max_gap_time, 1.0);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let none = |_t: f64, _req: f64| 0.0;
        assert!(compute_gap_series(Vec::<ForecastPoint>::new(), &none, 1.0, 0.15).is_err());
        assert!(compute_gap_series(vec![point(0.0, 1.0)], &none, -1.0, 0.15).is_err());
        assert!(compute_gap_series(vec![point(0.0, 1.0)], &none, 1.0, 1.5).is_err());
    }

    #[test]
    fn test_zero_demand_has_zero_gap_pct() {
        let none = |_t: f64, _req: f64| 0.0;
        let analysis = compute_gap_series(vec![point(0.0, 0.0)], &none, 100.0, 0.15).unwrap();
        assert_eq!(analysis.gap_pct, 0.0);
        assert_eq!(analysis.urgency, ProcurementUrgency::Surplus);
    }
}
