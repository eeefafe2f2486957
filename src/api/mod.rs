// ==========================================
// Right-to-Repair 备件责任预测 - API 层
// ==========================================
// 职责: 提供调用方入口（显式参数对象），组装报告与导出
// ==========================================

pub mod error;
pub mod export;
pub mod forecast_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use export::write_series_csv;
pub use forecast_api::{ForecastApi, LiabilityReport, ScenarioRequest};
