// ==========================================
// Right-to-Repair 备件责任预测 - 末次采购测算
// ==========================================
// 模型: 闭式点估计
//   order_quantity      = round(total_parts_required × order_multiplier)
//   total_investment    = order_quantity × unit_cost
//   expected_scrap_units = order_quantity × scrap_fraction
//   expected_scrap_cost  = expected_scrap_units × unit_cost × (1 − liquidation_recovery_fraction)
// ==========================================

use crate::domain::error::{ensure_non_negative, ForecastResult};
use crate::domain::procurement::{LastTimeBuyPolicy, LastTimeBuyResult};
use tracing::instrument;

/// 末次采购测算
///
/// # 参数
/// - `total_parts_required`: 窗口内累计需求（件），≥ 0
/// - `unit_cost`: 单价，≥ 0
/// - `policy`: 订货倍数 / 报废比例 / 清算回收比例
///
/// # 返回
/// - Err(ForecastError::InvalidParameter): 倍数或报废比例为负、回收比例不在 [0,1]、
///   需求或单价为负
#[instrument(skip(policy))]
pub fn size_last_time_buy(
    total_parts_required: f64,
    unit_cost: f64,
    policy: &LastTimeBuyPolicy,
) -> ForecastResult<LastTimeBuyResult> {
    policy.validate()?;
    ensure_non_negative("total_parts_required", total_parts_required)?;
    ensure_non_negative("unit_cost", unit_cost)?;

    let order_quantity = (total_parts_required * policy.order_multiplier).round() as u64;
    let total_investment = order_quantity as f64 * unit_cost;
    let expected_scrap_units = order_quantity as f64 * policy.scrap_fraction;
    let expected_scrap_cost =
        expected_scrap_units * unit_cost * (1.0 - policy.liquidation_recovery_fraction);

    tracing::info!(
        order_quantity,
        total_investment,
        expected_scrap_cost,
        "末次采购测算完成"
    );

    Ok(LastTimeBuyResult {
        order_quantity,
        total_investment,
        expected_scrap_units,
        expected_scrap_cost,
    })
}

/// 使用默认成本模型（1.1 / 0.08 / 0.3）测算
pub fn size_last_time_buy_default(
    total_parts_required: f64,
    unit_cost: f64,
) -> ForecastResult<LastTimeBuyResult> {
    size_last_time_buy(total_parts_required, unit_cost, &LastTimeBuyPolicy::default())
}
