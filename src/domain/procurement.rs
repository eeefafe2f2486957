// ==========================================
// Right-to-Repair 备件责任预测 - 采购领域模型
// ==========================================
// 职责: 缺口分析结果、末次采购策略与结果、Monte Carlo 摘要
// ==========================================

use crate::domain::error::{ensure_fraction, ensure_non_negative, ForecastError, ForecastResult};
use crate::domain::forecast::ForecastPoint;
use crate::domain::types::ProcurementUrgency;
use serde::{Deserialize, Serialize};

/// 默认报废率假设（资本占用中预计报废的比例）
pub const DEFAULT_SCRAP_RATE_ASSUMPTION: f64 = 0.15;

// ==========================================
// GapAnalysis - 责任楔形分析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub series: Vec<ForecastPoint>,

    // ===== 峰值缺口 =====
    pub max_gap: f64,      // 最大缺口（件）
    pub max_gap_time: f64, // 最大缺口出现时刻（年），并列时取最早

    // ===== 资本指标 =====
    pub total_parts_required: f64, // 窗口末的累计需求 = max(parts_required)
    pub capital_lockup: f64,       // total_parts_required × unit_cost
    pub scrap_risk: f64,           // capital_lockup × scrap_rate_assumption

    // ===== 紧迫度 =====
    pub gap_pct: f64,                   // max_gap / total_parts_required × 100
    pub urgency: ProcurementUrgency,
}

impl GapAnalysis {
    /// 缺口为正（短缺）的采样点数量
    pub fn shortfall_points(&self) -> usize {
        self.series.iter().filter(|p| p.is_shortfall()).count()
    }
}

// ==========================================
// LastTimeBuyPolicy - 末次采购成本模型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastTimeBuyPolicy {
    pub order_multiplier: f64,              // 订货倍数
    pub scrap_fraction: f64,                // 预计报废比例
    pub liquidation_recovery_fraction: f64, // 清算/回收可挽回的价值比例
}

impl Default for LastTimeBuyPolicy {
    fn default() -> Self {
        Self {
            order_multiplier: 1.1,
            scrap_fraction: 0.08,
            liquidation_recovery_fraction: 0.3,
        }
    }
}

impl LastTimeBuyPolicy {
    /// 校验规则:
    /// - order_multiplier ≥ 0
    /// - scrap_fraction ≥ 0
    /// - liquidation_recovery_fraction ∈ [0, 1]
    pub fn validate(&self) -> ForecastResult<()> {
        ensure_non_negative("order_multiplier", self.order_multiplier)?;
        ensure_non_negative("scrap_fraction", self.scrap_fraction)?;
        ensure_fraction(
            "liquidation_recovery_fraction",
            self.liquidation_recovery_fraction,
        )?;
        Ok(())
    }
}

// ==========================================
// LastTimeBuyResult - 末次采购建议
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastTimeBuyResult {
    pub order_quantity: u64,
    pub total_investment: f64,
    pub expected_scrap_units: f64,
    pub expected_scrap_cost: f64, // 扣除清算回收后的净成本
}

impl LastTimeBuyResult {
    /// 报废成本占总投资的百分比
    pub fn scrap_cost_pct(&self) -> f64 {
        if self.total_investment > 0.0 {
            self.expected_scrap_cost / self.total_investment * 100.0
        } else {
            0.0
        }
    }
}

// ==========================================
// MonteCarloSummary - 随机末次采购模拟摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    pub scenarios: usize,
    pub install_base: u64,
    pub horizon_years: f64,

    // ===== 窗口内失效数分布 =====
    pub mean_failures: f64,
    pub std_dev_failures: f64,
    pub p50_failures: u64,
    pub p95_failures: u64,
    pub min_failures: u64,
    pub max_failures: u64,

    // ===== 订货建议 =====
    pub buffer_factor: f64,
    pub p95_order_quantity: u64, // ceil(p95 × buffer_factor)
}

impl MonteCarloSummary {
    /// 由每个场景的失效计数构建摘要（最近秩分位数）
    pub fn from_counts(
        mut counts: Vec<u64>,
        install_base: u64,
        horizon_years: f64,
        buffer_factor: f64,
    ) -> ForecastResult<Self> {
        if counts.is_empty() {
            return Err(ForecastError::invalid("scenarios", 0.0, "模拟场景数必须 ≥ 1"));
        }
        counts.sort_unstable();

        let n = counts.len() as f64;
        let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
        let variance = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        let p50 = nearest_rank(&counts, 0.50);
        let p95 = nearest_rank(&counts, 0.95);

        Ok(Self {
            scenarios: counts.len(),
            install_base,
            horizon_years,
            mean_failures: mean,
            std_dev_failures: variance.sqrt(),
            p50_failures: p50,
            p95_failures: p95,
            min_failures: counts[0],
            max_failures: counts[counts.len() - 1],
            buffer_factor,
            p95_order_quantity: (p95 as f64 * buffer_factor).ceil() as u64,
        })
    }
}

/// 最近秩分位数，sorted 必须已升序且非空
fn nearest_rank(sorted: &[u64], q: f64) -> u64 {
    let rank = (q * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}
