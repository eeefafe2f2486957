// ==========================================
// Right-to-Repair 备件责任预测 - 引擎层
// ==========================================
// 职责: 失效预测、缺口规划、末次采购测算
// 红线: 引擎均为无状态纯函数，入口即时校验参数
// ==========================================

pub mod buffer;
pub mod failure_forecast;
pub mod inventory_decay;
pub mod last_time_buy;
pub mod liability_planner;
pub mod monte_carlo;

// 重导出核心引擎
pub use crate::domain::error::{ForecastError, ForecastResult};
pub use buffer::{BufferPolicy, LinearServiceLevelBuffer, REFERENCE_SERVICE_LEVEL_PCT};
pub use failure_forecast::{forecast, FailureForecastEngine, ForecastPoints, ForecastSeries};
pub use inventory_decay::{ExponentialWindDown, FixedStock, InventoryDecayPolicy};
pub use last_time_buy::{size_last_time_buy, size_last_time_buy_default};
pub use liability_planner::{compute_gap_series, LiabilityPlanner};
pub use monte_carlo::{MonteCarloSimulator, SeededSampler, UniformSampler};
