// ==========================================
// Right-to-Repair 备件责任预测 - 领域类型定义
// ==========================================
// 职责: 部件类别、淘汰风险、失效模式、采购紧迫度
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 部件类别 (Component Category)
// ==========================================
// 序列化格式: snake_case (与参考表键名一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Motors,     // 电机
    Batteries,  // 电池
    TcuDisplay, // 中控/显示屏
    Chargers,   // 充电器
}

impl ComponentCategory {
    /// 全部类别（参考表顺序）
    pub const ALL: [ComponentCategory; 4] = [
        ComponentCategory::Motors,
        ComponentCategory::Batteries,
        ComponentCategory::TcuDisplay,
        ComponentCategory::Chargers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Motors => "motors",
            ComponentCategory::Batteries => "batteries",
            ComponentCategory::TcuDisplay => "tcu_display",
            ComponentCategory::Chargers => "chargers",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ComponentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "motors" | "motor" => Ok(ComponentCategory::Motors),
            "batteries" | "battery" => Ok(ComponentCategory::Batteries),
            "tcu_display" | "tcu-display" | "display" | "tcu" => Ok(ComponentCategory::TcuDisplay),
            "chargers" | "charger" => Ok(ComponentCategory::Chargers),
            other => Err(format!("未知部件类别: {}", other)),
        }
    }
}

// ==========================================
// 淘汰风险 (Obsolescence Risk)
// ==========================================
// 顺序: Low < Medium < High < VeryHigh
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObsolescenceRisk {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for ObsolescenceRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObsolescenceRisk::Low => write!(f, "LOW"),
            ObsolescenceRisk::Medium => write!(f, "MEDIUM"),
            ObsolescenceRisk::High => write!(f, "HIGH"),
            ObsolescenceRisk::VeryHigh => write!(f, "VERY_HIGH"),
        }
    }
}

// ==========================================
// 失效模式 (Failure Mode)
// ==========================================
// 由 Weibull 形状参数 β 决定
// - β < 1: 早期失效（危险率递减）
// - β = 1: 随机失效（指数分布，危险率恒定）
// - β > 1: 磨损失效（危险率递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureMode {
    InfantMortality,
    Random,
    WearOut,
}

impl FailureMode {
    /// 根据形状参数判定失效模式
    pub fn from_shape(shape: f64) -> Self {
        if shape < 1.0 {
            FailureMode::InfantMortality
        } else if shape > 1.0 {
            FailureMode::WearOut
        } else {
            FailureMode::Random
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMode::InfantMortality => write!(f, "INFANT_MORTALITY"),
            FailureMode::Random => write!(f, "RANDOM"),
            FailureMode::WearOut => write!(f, "WEAR_OUT"),
        }
    }
}

// ==========================================
// 采购紧迫度 (Procurement Urgency)
// ==========================================
// 依据: 最大缺口占总需求的百分比 (gap_pct)
// 顺序: Surplus < Watch < Elevated < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcurementUrgency {
    Surplus,  // 库存覆盖全部需求
    Watch,    // 缺口 < 10%
    Elevated, // 缺口 < 30%
    Critical, // 缺口 >= 30%
}

impl ProcurementUrgency {
    pub const WATCH_THRESHOLD_PCT: f64 = 10.0;
    pub const CRITICAL_THRESHOLD_PCT: f64 = 30.0;

    /// 由最大缺口百分比判定紧迫度
    pub fn from_gap_pct(gap_pct: f64) -> Self {
        if gap_pct <= 0.0 {
            ProcurementUrgency::Surplus
        } else if gap_pct < Self::WATCH_THRESHOLD_PCT {
            ProcurementUrgency::Watch
        } else if gap_pct < Self::CRITICAL_THRESHOLD_PCT {
            ProcurementUrgency::Elevated
        } else {
            ProcurementUrgency::Critical
        }
    }

    /// i18n 键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProcurementUrgency::Surplus => "urgency.surplus",
            ProcurementUrgency::Watch => "urgency.watch",
            ProcurementUrgency::Elevated => "urgency.elevated",
            ProcurementUrgency::Critical => "urgency.critical",
        }
    }
}

impl fmt::Display for ProcurementUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcurementUrgency::Surplus => write!(f, "SURPLUS"),
            ProcurementUrgency::Watch => write!(f, "WATCH"),
            ProcurementUrgency::Elevated => write!(f, "ELEVATED"),
            ProcurementUrgency::Critical => write!(f, "CRITICAL"),
        }
    }
}
