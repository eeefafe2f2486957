// ==========================================
// Right-to-Repair 备件责任预测 - 预测请求与预测点
// ==========================================
// 生命周期: 每次预测调用临时创建，调用方消费后丢弃
// ==========================================

use crate::domain::error::{ensure_percent, ensure_positive, ForecastError, ForecastResult};
use crate::domain::weibull::WeibullModel;
use serde::{Deserialize, Serialize};

/// 默认预测窗口（年），对应加州 SB-244 的 7 年备件义务
pub const DEFAULT_HORIZON_YEARS: f64 = 7.0;

/// 默认采样步长（年），按季度
pub const DEFAULT_STEP_YEARS: f64 = 0.25;

/// 默认服务水平目标（%）
pub const DEFAULT_SERVICE_LEVEL_TARGET_PCT: f64 = 95.0;

/// 单条序列允许的最大采样点数
pub const MAX_POINT_COUNT: usize = 10_000_000;

// ==========================================
// ForecastRequest - 预测请求
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub install_base: u64,             // t=0 时的在用保有量
    pub horizon_years: f64,            // 预测窗口（年）
    pub step_years: f64,               // 采样步长（年）
    pub service_level_target_pct: f64, // 服务水平目标 [0, 100]
    pub model: WeibullModel,           // 失效时间分布
}

impl ForecastRequest {
    /// 使用领域默认值（7 年窗口、季度步长、95% 服务水平）创建请求
    pub fn new(install_base: u64, model: WeibullModel) -> Self {
        Self {
            install_base,
            horizon_years: DEFAULT_HORIZON_YEARS,
            step_years: DEFAULT_STEP_YEARS,
            service_level_target_pct: DEFAULT_SERVICE_LEVEL_TARGET_PCT,
            model,
        }
    }

    pub fn with_horizon(mut self, horizon_years: f64) -> Self {
        self.horizon_years = horizon_years;
        self
    }

    pub fn with_step(mut self, step_years: f64) -> Self {
        self.step_years = step_years;
        self
    }

    pub fn with_service_level(mut self, service_level_target_pct: f64) -> Self {
        self.service_level_target_pct = service_level_target_pct;
        self
    }

    /// 入口校验
    ///
    /// 规则:
    /// - install_base ≥ 1
    /// - horizon_years > 0, step_years > 0, step_years ≤ horizon_years
    /// - 1 + floor(horizon / step) ≤ MAX_POINT_COUNT
    /// - service_level_target_pct ∈ [0, 100]
    ///
    /// WeibullModel 的 β、η 在构造时已校验
    pub fn validate(&self) -> ForecastResult<()> {
        if self.install_base < 1 {
            return Err(ForecastError::invalid(
                "install_base",
                self.install_base as f64,
                "保有量必须 ≥ 1",
            ));
        }
        ensure_positive("horizon_years", self.horizon_years)?;
        ensure_positive("step_years", self.step_years)?;
        if self.step_years > self.horizon_years {
            return Err(ForecastError::invalid(
                "step_years",
                self.step_years,
                format!("步长不能大于预测窗口 ({} 年)", self.horizon_years),
            ));
        }
        self.point_count()?;
        ensure_percent("service_level_target_pct", self.service_level_target_pct)?;
        Ok(())
    }

    /// 采样点数量: 1 + floor(horizon / step)
    ///
    /// 对商加 1e-9 的相对容差，避免 0.7/0.1 = 6.999... 之类的商因浮点误差少算末点。
    /// 超过 MAX_POINT_COUNT 时返回 step_years 参数错误
    pub fn point_count(&self) -> ForecastResult<usize> {
        let too_fine = || {
            ForecastError::invalid(
                "step_years",
                self.step_years,
                format!(
                    "步长相对预测窗口 ({} 年) 过小，采样点超过 {}",
                    self.horizon_years, MAX_POINT_COUNT
                ),
            )
        };

        let steps = (self.horizon_years / self.step_years * (1.0 + 1e-9)).floor();
        if !(steps >= 0.0 && steps < MAX_POINT_COUNT as f64) {
            return Err(too_fine());
        }
        (steps as usize)
            .checked_add(1)
            .filter(|&n| n <= MAX_POINT_COUNT)
            .ok_or_else(too_fine)
    }
}

// ==========================================
// ForecastPoint - 预测序列中的单个采样点
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub t_years: f64,                     // 采样时刻（年）
    pub cumulative_failure_fraction: f64, // F(t) ∈ [0, 1]
    pub expected_failures: f64,           // install_base × F(t)
    pub parts_required: f64,              // expected_failures × buffer_factor
    pub available_inventory: f64,         // 由库存衰减策略给出
    pub gap: f64,                         // parts_required − available_inventory，可为负
}

impl ForecastPoint {
    /// 是否为缺口（需求超过可用库存）
    pub fn is_shortfall(&self) -> bool {
        self.gap > 0.0
    }
}
