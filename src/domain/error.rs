// ==========================================
// Right-to-Repair 备件责任预测 - 核心错误类型
// ==========================================
// 工具: thiserror 派生宏
// 规则: 核心只有一种错误（参数越界），入口处即时校验，不返回部分结果
// ==========================================

use thiserror::Error;

/// 预测核心错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("无效参数 (param={param}, value={value}): {reason}")]
    InvalidParameter {
        param: &'static str,
        value: f64,
        reason: String,
    },
}

impl ForecastError {
    pub fn invalid(param: &'static str, value: f64, reason: impl Into<String>) -> Self {
        ForecastError::InvalidParameter {
            param,
            value,
            reason: reason.into(),
        }
    }

    /// 出错的参数名
    pub fn param(&self) -> &'static str {
        match self {
            ForecastError::InvalidParameter { param, .. } => param,
        }
    }
}

/// Result 类型别名
pub type ForecastResult<T> = Result<T, ForecastError>;

// ==========================================
// 参数校验辅助函数
// ==========================================
// 注意: 比较写成 !(x > 0.0) 的形式，使 NaN 同样被拒绝

/// 校验严格为正的有限数
pub fn ensure_positive(param: &'static str, value: f64) -> ForecastResult<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(ForecastError::invalid(param, value, "必须为正的有限数"));
    }
    Ok(())
}

/// 校验非负的有限数
pub fn ensure_non_negative(param: &'static str, value: f64) -> ForecastResult<()> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(ForecastError::invalid(param, value, "必须为非负的有限数"));
    }
    Ok(())
}

/// 校验取值在 [0, 1] 内
pub fn ensure_fraction(param: &'static str, value: f64) -> ForecastResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ForecastError::invalid(param, value, "必须位于 [0, 1] 区间"));
    }
    Ok(())
}

/// 校验百分比取值在 [0, 100] 内
pub fn ensure_percent(param: &'static str, value: f64) -> ForecastResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ForecastError::invalid(param, value, "必须位于 [0, 100] 区间"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("shape", 1.5).is_ok());
        assert!(ensure_positive("shape", 0.0).is_err());
        assert!(ensure_positive("shape", -1.0).is_err());
        assert!(ensure_positive("shape", f64::NAN).is_err());
        assert!(ensure_positive("shape", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_fraction_and_percent() {
        assert!(ensure_fraction("recovery", 0.0).is_ok());
        assert!(ensure_fraction("recovery", 1.0).is_ok());
        assert!(ensure_fraction("recovery", 1.01).is_err());
        assert!(ensure_fraction("recovery", f64::NAN).is_err());
        assert!(ensure_percent("service_level", 95.0).is_ok());
        assert!(ensure_percent("service_level", 100.5).is_err());
    }

    #[test]
    fn test_error_message_names_param() {
        let err = ForecastError::invalid("scale_years", -1.0, "必须为正的有限数");
        assert_eq!(err.param(), "scale_years");
        let msg = err.to_string();
        assert!(msg.contains("scale_years"));
        assert!(msg.contains("-1"));
    }
}
