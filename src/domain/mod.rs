// ==========================================
// Right-to-Repair 备件责任预测 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、参考数据与核心错误
// 红线: 不含预测/规划逻辑，所有实体为值语义、调用结束即丢弃
// ==========================================

pub mod component;
pub mod error;
pub mod forecast;
pub mod legislation;
pub mod procurement;
pub mod types;
pub mod weibull;

// 重导出核心类型
pub use component::{all_profiles, ComponentProfile};
pub use error::{ForecastError, ForecastResult};
pub use forecast::{
    ForecastPoint, ForecastRequest, DEFAULT_HORIZON_YEARS, DEFAULT_SERVICE_LEVEL_TARGET_PCT,
    DEFAULT_STEP_YEARS, MAX_POINT_COUNT,
};
pub use legislation::SupportObligation;
pub use procurement::{
    GapAnalysis, LastTimeBuyPolicy, LastTimeBuyResult, MonteCarloSummary,
    DEFAULT_SCRAP_RATE_ASSUMPTION,
};
pub use types::{ComponentCategory, FailureMode, ObsolescenceRisk, ProcurementUrgency};
pub use weibull::WeibullModel;
