// ==========================================
// Right-to-Repair 备件责任预测 - 预测 API
// ==========================================
// 职责: 为展示层提供显式参数对象入口，组装预测 → 缺口 → 报告
// 架构: API 层 → Engine 层 (FailureForecastEngine / LiabilityPlanner)
// 红线: 不依赖任何环境状态，筛选条件一律经 ScenarioRequest 传入
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, PlannerConfig};
use crate::domain::component::{all_profiles, ComponentProfile};
use crate::domain::forecast::ForecastRequest;
use crate::domain::legislation::SupportObligation;
use crate::domain::procurement::{GapAnalysis, LastTimeBuyResult, MonteCarloSummary};
use crate::domain::types::{ComponentCategory, FailureMode};
use crate::domain::weibull::WeibullModel;
use crate::engine::{
    size_last_time_buy, FailureForecastEngine, LiabilityPlanner, MonteCarloSimulator,
    SeededSampler,
};
use crate::i18n;
use crate::perf::PerfGuard;

// ==========================================
// ScenarioRequest - 预测场景参数对象
// ==========================================
/// 一次预测调用的全部输入
///
/// Weibull 参数可以来自部件类别的参考画像，也可以显式给出；
/// 显式值优先。其余可选字段为空时取配置默认值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub component: Option<ComponentCategory>,
    #[serde(default)]
    pub weibull_shape: Option<f64>,
    #[serde(default)]
    pub weibull_scale_years: Option<f64>,
    pub install_base: u64,
    #[serde(default)]
    pub service_level_target_pct: Option<f64>,
    #[serde(default)]
    pub horizon_years: Option<f64>,
    #[serde(default)]
    pub step_years: Option<f64>,
    #[serde(default)]
    pub obligation: Option<SupportObligation>,
    pub unit_cost: f64,
}

impl ScenarioRequest {
    /// 以部件类别参考画像创建场景
    pub fn for_component(component: ComponentCategory, install_base: u64, unit_cost: f64) -> Self {
        Self {
            label: None,
            component: Some(component),
            weibull_shape: None,
            weibull_scale_years: None,
            install_base,
            service_level_target_pct: None,
            horizon_years: None,
            step_years: None,
            obligation: None,
            unit_cost,
        }
    }

    /// 以显式 Weibull 参数创建场景
    pub fn with_weibull(shape: f64, scale_years: f64, install_base: u64, unit_cost: f64) -> Self {
        Self {
            label: None,
            component: None,
            weibull_shape: Some(shape),
            weibull_scale_years: Some(scale_years),
            install_base,
            service_level_target_pct: None,
            horizon_years: None,
            step_years: None,
            obligation: None,
            unit_cost,
        }
    }

    /// 解析 Weibull 模型
    fn resolve_model(&self) -> ApiResult<WeibullModel> {
        let profile = self.component.map(|c| c.profile());
        let shape = self
            .weibull_shape
            .or_else(|| profile.map(|p| p.weibull_shape));
        let scale = self
            .weibull_scale_years
            .or_else(|| profile.map(|p| p.weibull_scale_years));

        match (shape, scale) {
            (Some(shape), Some(scale)) => Ok(WeibullModel::new(shape, scale)?),
            _ => Err(ApiError::InvalidInput(
                "必须指定部件类别或同时给出 weibull_shape 与 weibull_scale_years".to_string(),
            )),
        }
    }

    /// 场景适用的法规义务（未指定时取配置）
    pub fn effective_obligation(&self, config: &PlannerConfig) -> SupportObligation {
        self.obligation.unwrap_or(config.obligation)
    }

    /// 结合配置默认值构建预测请求
    ///
    /// 预测窗口优先级: 显式 horizon_years > 场景法规义务 > 配置
    pub fn to_forecast_request(&self, config: &PlannerConfig) -> ApiResult<ForecastRequest> {
        let horizon_years = match (self.horizon_years, self.obligation) {
            (Some(horizon), _) => horizon,
            (None, Some(obligation)) => obligation.horizon_years(),
            (None, None) => config.effective_horizon_years(),
        };
        let request = ForecastRequest {
            install_base: self.install_base,
            horizon_years,
            step_years: self.step_years.unwrap_or(config.step_years),
            service_level_target_pct: self
                .service_level_target_pct
                .unwrap_or(config.service_level_target_pct),
            model: self.resolve_model()?,
        };
        request.validate()?;
        Ok(request)
    }
}

// ==========================================
// LiabilityReport - 责任楔形报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiabilityReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub scenario: ScenarioRequest,
    pub request: ForecastRequest,
    pub obligation: SupportObligation,
    pub penalty_note: String,
    pub failure_mode: FailureMode,
    pub buffer_factor: f64,
    pub analysis: GapAnalysis,
    pub recommendation: String,
}

// ==========================================
// ForecastApi - 预测 API
// ==========================================
pub struct ForecastApi {
    config: PlannerConfig,
    engine: FailureForecastEngine,
    planner: LiabilityPlanner,
}

impl ForecastApi {
    /// 创建新的 ForecastApi 实例
    pub fn new(config_manager: &ConfigManager) -> Self {
        Self::with_config(config_manager.config().clone())
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            engine: FailureForecastEngine::new(),
            planner: LiabilityPlanner::new(),
        }
    }

    /// 替换失效预测引擎（例如自定义缓冲策略）
    pub fn with_engine(mut self, engine: FailureForecastEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    // ==========================================
    // 责任楔形
    // ==========================================

    /// 运行责任楔形预测
    ///
    /// # 返回
    /// - Ok(LiabilityReport): 回填库存的序列 + 峰值缺口 + 资本指标 + 建议
    /// - Err(ApiError::InvalidInput / InvalidParameter): 参数越界
    pub fn run_liability_forecast(&self, scenario: &ScenarioRequest) -> ApiResult<LiabilityReport> {
        let perf = PerfGuard::new("run_liability_forecast");

        if !(scenario.unit_cost >= 0.0) || !scenario.unit_cost.is_finite() {
            return Err(ApiError::InvalidInput(format!(
                "单价必须为非负有限数: {}",
                scenario.unit_cost
            )));
        }

        let request = scenario.to_forecast_request(&self.config)?;
        let series = self.engine.forecast(&request)?;
        perf.record_points(series.len());

        let analysis = self.planner.compute_gap_series(
            series,
            &self.config.inventory_decay,
            scenario.unit_cost,
            self.config.scrap_rate_assumption,
        )?;

        let recommendation = self.build_recommendation(&analysis);
        let obligation = scenario.effective_obligation(&self.config);

        Ok(LiabilityReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            scenario: scenario.clone(),
            obligation,
            penalty_note: obligation.penalty_note().to_string(),
            failure_mode: request.model.failure_mode(),
            buffer_factor: series.buffer_factor(),
            request,
            analysis,
            recommendation,
        })
    }

    /// 生成本地化建议文本
    fn build_recommendation(&self, analysis: &GapAnalysis) -> String {
        let multiplier_pct = format!("{:.0}", self.config.last_time_buy.order_multiplier * 100.0);
        let gap_pct = format!("{:.1}", analysis.gap_pct);
        let year = format!("{:.2}", analysis.max_gap_time);
        let urgency = i18n::t_in(&self.config.locale, analysis.urgency.i18n_key());

        i18n::t_with_args_in(
            &self.config.locale,
            "recommendation.summary",
            &[
                ("urgency", urgency.as_str()),
                ("gap_pct", gap_pct.as_str()),
                ("year", year.as_str()),
                ("multiplier_pct", multiplier_pct.as_str()),
            ],
        )
    }

    // ==========================================
    // 末次采购
    // ==========================================

    /// 闭式末次采购测算（使用配置中的成本模型）
    pub fn size_last_time_buy(
        &self,
        total_parts_required: f64,
        unit_cost: f64,
    ) -> ApiResult<LastTimeBuyResult> {
        Ok(size_last_time_buy(
            total_parts_required,
            unit_cost,
            &self.config.last_time_buy,
        )?)
    }

    /// Monte Carlo 末次采购模拟
    pub fn simulate_last_time_buy(&self, scenario: &ScenarioRequest) -> ApiResult<MonteCarloSummary> {
        let perf = PerfGuard::new("simulate_last_time_buy");

        let request = scenario.to_forecast_request(&self.config)?;
        let simulator = MonteCarloSimulator::new(
            self.config.monte_carlo.scenarios,
            self.config.monte_carlo.seed,
        )?;
        let buffer_factor = self.engine.buffer_factor(request.service_level_target_pct);
        let mut sampler = SeededSampler::new(self.config.monte_carlo.seed);

        perf.record_points(simulator.scenarios());
        Ok(simulator.simulate_with(&request, buffer_factor, &mut sampler)?)
    }

    // ==========================================
    // 参考数据
    // ==========================================

    /// 部件生命周期参考表
    pub fn component_profiles(&self) -> Vec<ComponentProfile> {
        all_profiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_model_prefers_explicit() {
        let mut scenario = ScenarioRequest::for_component(ComponentCategory::Motors, 1000, 100.0);
        scenario.weibull_shape = Some(1.0);
        let model = scenario.resolve_model().unwrap();
        assert_eq!(model.shape(), 1.0);
        assert_eq!(model.scale_years(), 6.5);
    }

    #[test]
    fn test_resolve_model_requires_source() {
        let mut scenario = ScenarioRequest::with_weibull(1.5, 5.0, 1000, 100.0);
        scenario.weibull_scale_years = None;
        assert!(matches!(
            scenario.resolve_model(),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_request_uses_config_defaults() {
        let config = PlannerConfig {
            obligation: SupportObligation::EuRightToRepair,
            ..PlannerConfig::default()
        };
        let scenario = ScenarioRequest::with_weibull(2.0, 6.0, 500, 10.0);
        let request = scenario.to_forecast_request(&config).unwrap();
        assert_eq!(request.horizon_years, 10.0);
        assert_eq!(request.step_years, 0.25);
        assert_eq!(request.service_level_target_pct, 95.0);
    }

    #[test]
    fn test_scenario_obligation_overrides_config_horizon() {
        let config = PlannerConfig::default();
        let mut scenario = ScenarioRequest::with_weibull(2.0, 6.0, 500, 10.0);
        scenario.obligation = Some(SupportObligation::EuRightToRepair);
        let request = scenario.to_forecast_request(&config).unwrap();
        assert_eq!(request.horizon_years, 10.0);

        scenario.horizon_years = Some(3.0);
        let request = scenario.to_forecast_request(&config).unwrap();
        assert_eq!(request.horizon_years, 3.0);
    }
}
