// ==========================================
// Right-to-Repair 备件责任预测 - 失效预测引擎
// ==========================================
// 输入: ForecastRequest (保有量 + 窗口 + 步长 + 服务水平 + Weibull 模型)
// 输出: ForecastSeries (惰性、有限、可重复遍历的 ForecastPoint 序列)
// ==========================================
// 红线: 纯函数，无随机性；相同请求逐位相同的输出
// ==========================================

use crate::domain::error::ForecastResult;
use crate::domain::forecast::{ForecastPoint, ForecastRequest};
use crate::engine::buffer::{BufferPolicy, LinearServiceLevelBuffer};
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// FailureForecastEngine - 失效预测引擎
// ==========================================
pub struct FailureForecastEngine {
    buffer_policy: Arc<dyn BufferPolicy>,
}

impl Default for FailureForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FailureForecastEngine {
    /// 使用线性服务水平缓冲（参考点 85%）创建引擎
    pub fn new() -> Self {
        Self {
            buffer_policy: Arc::new(LinearServiceLevelBuffer::default()),
        }
    }

    /// 使用自定义缓冲策略创建引擎
    pub fn with_buffer_policy(policy: impl BufferPolicy + 'static) -> Self {
        Self {
            buffer_policy: Arc::new(policy),
        }
    }

    /// 当前策略下的缓冲系数
    pub fn buffer_factor(&self, service_level_target_pct: f64) -> f64 {
        self.buffer_policy.buffer_factor(service_level_target_pct)
    }

    /// 生成失效预测序列
    ///
    /// # 返回
    /// - Ok(ForecastSeries): 1 + floor(horizon/step) 个点，t 从 0 起升序
    /// - Err(ForecastError::InvalidParameter): 参数越界，不产生任何点
    ///
    /// 序列中 available_inventory 为 0、gap 等于 parts_required，
    /// 由 LiabilityPlanner 按库存策略回填
    #[instrument(skip(self, request), fields(install_base = request.install_base))]
    pub fn forecast(&self, request: &ForecastRequest) -> ForecastResult<ForecastSeries> {
        request.validate()?;

        let buffer_factor = self.buffer_factor(request.service_level_target_pct);
        let series = ForecastSeries {
            request: *request,
            buffer_factor,
            len: request.point_count()?,
        };

        tracing::debug!(
            points = series.len,
            buffer_factor,
            shape = request.model.shape(),
            scale_years = request.model.scale_years(),
            "失效预测序列已就绪"
        );

        Ok(series)
    }
}

/// 使用默认缓冲策略生成失效预测序列
pub fn forecast(request: &ForecastRequest) -> ForecastResult<ForecastSeries> {
    FailureForecastEngine::new().forecast(request)
}

// ==========================================
// ForecastSeries - 惰性预测序列
// ==========================================
/// 已校验的预测序列
///
/// 只保存请求与缓冲系数，点在遍历时计算；`iter()` 可调用任意次
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSeries {
    request: ForecastRequest,
    buffer_factor: f64,
    len: usize,
}

impl ForecastSeries {
    pub fn request(&self) -> &ForecastRequest {
        &self.request
    }

    pub fn buffer_factor(&self) -> f64 {
        self.buffer_factor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 从头遍历
    pub fn iter(&self) -> ForecastPoints {
        ForecastPoints {
            series: *self,
            index: 0,
        }
    }

    /// 第 index 个采样点
    pub fn point_at(&self, index: usize) -> Option<ForecastPoint> {
        if index >= self.len {
            return None;
        }
        // t = i × step，避免累加误差；容差补出的末点落在窗口上
        let t_years = (index as f64 * self.request.step_years).min(self.request.horizon_years);
        let fraction = self.request.model.cdf(t_years);
        let expected_failures = self.request.install_base as f64 * fraction;
        let parts_required = expected_failures * self.buffer_factor;

        Some(ForecastPoint {
            t_years,
            cumulative_failure_fraction: fraction,
            expected_failures,
            parts_required,
            available_inventory: 0.0,
            gap: parts_required,
        })
    }

    /// 最后一个采样点（窗口末）
    pub fn last(&self) -> Option<ForecastPoint> {
        self.len.checked_sub(1).and_then(|i| self.point_at(i))
    }

    pub fn to_vec(&self) -> Vec<ForecastPoint> {
        self.iter().collect()
    }
}

impl IntoIterator for ForecastSeries {
    type Item = ForecastPoint;
    type IntoIter = ForecastPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ForecastSeries {
    type Item = ForecastPoint;
    type IntoIter = ForecastPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ==========================================
// ForecastPoints - 序列迭代器
// ==========================================
#[derive(Debug, Clone)]
pub struct ForecastPoints {
    series: ForecastSeries,
    index: usize,
}

impl Iterator for ForecastPoints {
    type Item = ForecastPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.series.point_at(self.index)?;
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ForecastPoints {}

impl std::iter::FusedIterator for ForecastPoints {}
