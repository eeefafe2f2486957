// ==========================================
// Right-to-Repair 备件责任预测 - 库存衰减策略
// ==========================================
// 职责: 给出 t 时刻的可用库存
// 约束: 规划器只依赖 available_inventory(t) ≥ 0
// ==========================================

use crate::domain::error::{ensure_non_negative, ensure_positive, ForecastResult};
use serde::{Deserialize, Serialize};

// ==========================================
// Trait: InventoryDecayPolicy
// ==========================================
/// 库存可用性策略
///
/// 参数 `parts_required` 供参考策略自引用使用；独立的库存模型可以忽略它
pub trait InventoryDecayPolicy {
    fn available_inventory(&self, t_years: f64, parts_required: f64) -> f64;
}

impl<F> InventoryDecayPolicy for F
where
    F: Fn(f64, f64) -> f64,
{
    fn available_inventory(&self, t_years: f64, parts_required: f64) -> f64 {
        self(t_years, parts_required)
    }
}

// ==========================================
// ExponentialWindDown - 供应商逐步停产
// ==========================================
/// available(t) = max(req × floor_fraction, req × initial_fraction × exp(−t / τ))
///
/// 简化模型：库存按需求的比例表示，而非独立仿真
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExponentialWindDown {
    pub initial_fraction: f64,
    pub decay_floor_fraction: f64,
    pub decay_time_constant_years: f64,
}

impl Default for ExponentialWindDown {
    fn default() -> Self {
        Self {
            initial_fraction: 0.7,
            decay_floor_fraction: 0.3,
            decay_time_constant_years: 4.0,
        }
    }
}

impl ExponentialWindDown {
    /// 创建并校验
    ///
    /// 规则: 两个比例 ≥ 0，时间常数 > 0
    pub fn new(
        initial_fraction: f64,
        decay_floor_fraction: f64,
        decay_time_constant_years: f64,
    ) -> ForecastResult<Self> {
        let policy = Self {
            initial_fraction,
            decay_floor_fraction,
            decay_time_constant_years,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> ForecastResult<()> {
        ensure_non_negative("initial_fraction", self.initial_fraction)?;
        ensure_non_negative("decay_floor_fraction", self.decay_floor_fraction)?;
        ensure_positive("decay_time_constant_years", self.decay_time_constant_years)?;
        Ok(())
    }
}

impl InventoryDecayPolicy for ExponentialWindDown {
    fn available_inventory(&self, t_years: f64, parts_required: f64) -> f64 {
        let floor = parts_required * self.decay_floor_fraction;
        let decayed = parts_required
            * self.initial_fraction
            * (-t_years / self.decay_time_constant_years).exp();
        floor.max(decayed)
    }
}

// ==========================================
// FixedStock - 固定在库数量
// ==========================================
/// 与需求无关的固定库存（例如已下达的末次采购量）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedStock {
    pub units: f64,
}

impl FixedStock {
    pub fn new(units: f64) -> ForecastResult<Self> {
        ensure_non_negative("units", units)?;
        Ok(Self { units })
    }
}

impl InventoryDecayPolicy for FixedStock {
    fn available_inventory(&self, _t_years: f64, _parts_required: f64) -> f64 {
        self.units
    }
}
