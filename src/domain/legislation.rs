// ==========================================
// Right-to-Repair 备件责任预测 - 法规备件义务
// ==========================================
// 职责: 法定备件供应期限，决定预测窗口长度
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SupportObligation - 法定备件义务
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportObligation {
    CaliforniaSb244,  // 加州 SB-244：7 年
    EuRightToRepair,  // 欧盟维修权指令（草案）：10 年
}

impl SupportObligation {
    /// 法定备件供应年限
    pub fn support_years(&self) -> u32 {
        match self {
            SupportObligation::CaliforniaSb244 => 7,
            SupportObligation::EuRightToRepair => 10,
        }
    }

    /// 预测窗口（年）
    pub fn horizon_years(&self) -> f64 {
        self.support_years() as f64
    }

    /// 生效日期
    pub fn effective_date(&self) -> NaiveDate {
        match self {
            SupportObligation::CaliforniaSb244 => NaiveDate::from_ymd_opt(2024, 7, 1),
            SupportObligation::EuRightToRepair => NaiveDate::from_ymd_opt(2025, 6, 1),
        }
        .unwrap_or(NaiveDate::MIN)
    }

    /// 是否已生效（EU 指令仍在立法流程中）
    pub fn is_enacted(&self) -> bool {
        matches!(self, SupportObligation::CaliforniaSb244)
    }

    /// 在指定日期是否生效
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.is_enacted() && date >= self.effective_date()
    }

    /// 违反义务时的处罚说明，随报告输出
    pub fn penalty_note(&self) -> &'static str {
        match self {
            SupportObligation::CaliforniaSb244 => "$1,000 per violation",
            SupportObligation::EuRightToRepair => "Up to 4% of annual EU revenue",
        }
    }
}

impl Default for SupportObligation {
    fn default() -> Self {
        SupportObligation::CaliforniaSb244
    }
}

impl fmt::Display for SupportObligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportObligation::CaliforniaSb244 => write!(f, "California SB-244"),
            SupportObligation::EuRightToRepair => write!(f, "EU Right to Repair Directive"),
        }
    }
}

impl std::str::FromStr for SupportObligation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ca" | "california" | "california_sb244" | "sb-244" | "sb244" => {
                Ok(SupportObligation::CaliforniaSb244)
            }
            "eu" | "eu_right_to_repair" | "eu-right-to-repair" => {
                Ok(SupportObligation::EuRightToRepair)
            }
            other => Err(format!("未知法规: {}", other)),
        }
    }
}
