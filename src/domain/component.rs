// ==========================================
// Right-to-Repair 备件责任预测 - 部件生命周期参考表
// ==========================================
// 职责: 各部件类别的 Weibull 标定参数与换代/支持周期
// 说明: 参考值为领域标定数据，调用方可直接用显式 β/η 覆盖
// ==========================================

use crate::domain::error::ForecastResult;
use crate::domain::types::{ComponentCategory, ObsolescenceRisk};
use crate::domain::weibull::WeibullModel;
use serde::Serialize;

// ==========================================
// ComponentProfile - 部件生命周期画像
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentProfile {
    pub category: ComponentCategory,
    pub generation_cycle_months: u32,           // 换代周期（月）
    pub support_after_discontinuation_months: u32, // 停产后支持期（月）
    pub weibull_shape: f64,
    pub weibull_scale_years: f64,
    pub obsolescence_risk: ObsolescenceRisk,
    pub notes: &'static str,
}

impl ComponentProfile {
    /// 参考表中的 Weibull 模型
    pub fn weibull(&self) -> ForecastResult<WeibullModel> {
        WeibullModel::new(self.weibull_shape, self.weibull_scale_years)
    }

    /// 支持期（年）
    pub fn support_years(&self) -> f64 {
        self.support_after_discontinuation_months as f64 / 12.0
    }

    /// 支持期内会经历的换代次数（向上取整）
    pub fn generations_within_support(&self) -> u32 {
        self.support_after_discontinuation_months
            .div_ceil(self.generation_cycle_months.max(1))
    }
}

impl ComponentCategory {
    /// 查询参考画像
    pub fn profile(&self) -> ComponentProfile {
        match self {
            ComponentCategory::Motors => ComponentProfile {
                category: *self,
                generation_cycle_months: 20,
                support_after_discontinuation_months: 84,
                weibull_shape: 2.1,
                weibull_scale_years: 6.5,
                obsolescence_risk: ObsolescenceRisk::Medium,
                notes: "Motor technology stable, main risk is firmware/controller chips",
            },
            ComponentCategory::Batteries => ComponentProfile {
                category: *self,
                generation_cycle_months: 18,
                support_after_discontinuation_months: 84,
                weibull_shape: 1.8,
                weibull_scale_years: 5.0,
                obsolescence_risk: ObsolescenceRisk::High,
                notes: "Fast-moving chemistry, cell supply chain risk",
            },
            ComponentCategory::TcuDisplay => ComponentProfile {
                category: *self,
                generation_cycle_months: 24,
                support_after_discontinuation_months: 60,
                weibull_shape: 1.2,
                weibull_scale_years: 8.0,
                obsolescence_risk: ObsolescenceRisk::VeryHigh,
                notes: "Chip shortage risk, firmware dependency, BT/ANT+ protocol changes",
            },
            ComponentCategory::Chargers => ComponentProfile {
                category: *self,
                generation_cycle_months: 36,
                support_after_discontinuation_months: 84,
                weibull_shape: 1.5,
                weibull_scale_years: 7.0,
                obsolescence_risk: ObsolescenceRisk::Low,
                notes: "Stable technology, commodity components",
            },
        }
    }
}

/// 全部参考画像
pub fn all_profiles() -> Vec<ComponentProfile> {
    ComponentCategory::ALL.iter().map(|c| c.profile()).collect()
}
