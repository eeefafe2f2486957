// ==========================================
// Right-to-Repair 备件责任预测 - 核心库
// ==========================================
// 职责: Weibull 失效预测 → 库存缺口 → 末次采购测算
// 系统定位: 决策支持（建议由人工最终确认）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体、参考数据与核心错误
pub mod domain;

// 引擎层 - 预测与规划
pub mod engine;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// API 层 - 调用方入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ComponentCategory, FailureMode, ObsolescenceRisk, ProcurementUrgency};

// 领域实体
pub use domain::{
    ComponentProfile, ForecastError, ForecastPoint, ForecastRequest, ForecastResult, GapAnalysis,
    LastTimeBuyPolicy, LastTimeBuyResult, MonteCarloSummary, SupportObligation, WeibullModel,
};

// 引擎
pub use engine::{
    compute_gap_series, forecast, size_last_time_buy, BufferPolicy, ExponentialWindDown,
    FailureForecastEngine, ForecastSeries, InventoryDecayPolicy, LiabilityPlanner,
    MonteCarloSimulator,
};

// 配置
pub use config::{ConfigManager, PlannerConfig};

// API
pub use api::{ApiError, ApiResult, ForecastApi, LiabilityReport, ScenarioRequest};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Right-to-Repair 备件责任预测";
