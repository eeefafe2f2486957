use crate::domain::error::{ensure_fraction, ensure_percent, ensure_positive, ForecastError, ForecastResult};
use crate::domain::forecast::{DEFAULT_SERVICE_LEVEL_TARGET_PCT, DEFAULT_STEP_YEARS};
use crate::domain::legislation::SupportObligation;
use crate::domain::procurement::{LastTimeBuyPolicy, DEFAULT_SCRAP_RATE_ASSUMPTION};
use crate::engine::inventory_decay::ExponentialWindDown;
use crate::engine::monte_carlo::{DEFAULT_SCENARIOS, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

/// 规划器配置（持久化对象）
///
/// 所有字段都有默认值，配置文件只需写需要覆盖的项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 法规义务（决定默认预测窗口）
    pub obligation: SupportObligation,

    /// 显式预测窗口（年），为空时取法规年限
    pub horizon_years: Option<f64>,

    /// 采样步长（年）
    pub step_years: f64,

    /// 服务水平目标（%）
    pub service_level_target_pct: f64,

    /// 库存衰减参考策略参数
    pub inventory_decay: ExponentialWindDown,

    /// 报废率假设
    pub scrap_rate_assumption: f64,

    /// 末次采购成本模型
    pub last_time_buy: LastTimeBuyPolicy,

    /// Monte Carlo 参数
    pub monte_carlo: MonteCarloConfig,

    /// 报告语言（en / zh-CN）
    pub locale: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            obligation: SupportObligation::default(),
            horizon_years: None,
            step_years: DEFAULT_STEP_YEARS,
            service_level_target_pct: DEFAULT_SERVICE_LEVEL_TARGET_PCT,
            inventory_decay: ExponentialWindDown::default(),
            scrap_rate_assumption: DEFAULT_SCRAP_RATE_ASSUMPTION,
            last_time_buy: LastTimeBuyPolicy::default(),
            monte_carlo: MonteCarloConfig::default(),
            locale: "en".to_string(),
        }
    }
}

impl PlannerConfig {
    /// 生效的预测窗口（年）
    pub fn effective_horizon_years(&self) -> f64 {
        self.horizon_years
            .unwrap_or_else(|| self.obligation.horizon_years())
    }

    /// 配置校验（加载时调用）
    pub fn validate(&self) -> ForecastResult<()> {
        let horizon = self.effective_horizon_years();
        ensure_positive("horizon_years", horizon)?;
        ensure_positive("step_years", self.step_years)?;
        if self.step_years > horizon {
            return Err(ForecastError::invalid(
                "step_years",
                self.step_years,
                format!("步长不能大于预测窗口 ({} 年)", horizon),
            ));
        }
        ensure_percent("service_level_target_pct", self.service_level_target_pct)?;
        self.inventory_decay.validate()?;
        ensure_fraction("scrap_rate_assumption", self.scrap_rate_assumption)?;
        self.last_time_buy.validate()?;
        if self.monte_carlo.scenarios == 0 {
            return Err(ForecastError::invalid("scenarios", 0.0, "模拟场景数必须 ≥ 1"));
        }
        Ok(())
    }
}

/// Monte Carlo 配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    pub scenarios: usize,
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            scenarios: DEFAULT_SCENARIOS,
            seed: DEFAULT_SEED,
        }
    }
}
