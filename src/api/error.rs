// ==========================================
// Right-to-Repair 备件责任预测 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换核心错误为调用方可读的错误消息
// ==========================================

use crate::domain::error::ForecastError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    InvalidParameter(#[from] ForecastError),

    // ==========================================
    // 配置与导出错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    #[error("序列化失败: {0}")]
    SerializationError(#[from] serde_json::Error),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否为参数越界（调用方修正输入后可重试）
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ApiError::InvalidParameter(_) | ApiError::InvalidInput(_))
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_error_converts() {
        let err: ApiError = ForecastError::invalid("shape", 0.0, "必须为正的有限数").into();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("shape"));
    }

    #[test]
    fn test_config_error_is_not_parameter_error() {
        let err = ApiError::ConfigError("missing".to_string());
        assert!(!err.is_invalid_parameter());
        assert_eq!(err.to_string(), "配置错误: missing");
    }
}
