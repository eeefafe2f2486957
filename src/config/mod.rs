// ==========================================
// Right-to-Repair 备件责任预测 - 配置层
// ==========================================
// 职责: 规划参数的默认值、文件加载与快照
// 存储: JSON 配置文件（可选），无数据库
// ==========================================

pub mod config_manager;
pub mod planner_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use planner_config::{MonteCarloConfig, PlannerConfig};
