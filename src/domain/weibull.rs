// ==========================================
// Right-to-Repair 备件责任预测 - Weibull 失效时间模型
// ==========================================
// 模型: 两参数 Weibull 分布
//   F(t) = 1 − exp(−(t/η)^β)
//   S(t) = exp(−(t/η)^β)
//   h(t) = (β/η)·(t/η)^(β−1)
// ==========================================

use crate::domain::error::{ensure_fraction, ensure_non_negative, ensure_positive, ForecastResult};
use crate::domain::types::FailureMode;
use serde::{Deserialize, Serialize};

// ==========================================
// WeibullModel - 失效时间分布
// ==========================================
/// 部件群体的失效时间分布
///
/// 构造后不可变；字段只能通过 [`WeibullModel::new`] 设置，保证 β>0、η>0。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeibullModel {
    shape: f64,       // β (无量纲)
    scale_years: f64, // η (年)
}

impl WeibullModel {
    /// 创建 Weibull 模型
    ///
    /// # 参数
    /// - `shape`: 形状参数 β，必须 > 0
    /// - `scale_years`: 尺度参数 η（年），必须 > 0
    ///
    /// # 返回
    /// - Err(ForecastError::InvalidParameter): β≤0 或 η≤0 或非有限数
    pub fn new(shape: f64, scale_years: f64) -> ForecastResult<Self> {
        ensure_positive("shape", shape)?;
        ensure_positive("scale_years", scale_years)?;
        Ok(Self { shape, scale_years })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn scale_years(&self) -> f64 {
        self.scale_years
    }

    pub fn failure_mode(&self) -> FailureMode {
        FailureMode::from_shape(self.shape)
    }

    /// 累积指数 (t/η)^β
    ///
    /// t ≤ 0 时返回 0；t/η 极大时可能为 +∞，调用方据此饱和
    fn cumulative_hazard(&self, t_years: f64) -> f64 {
        if t_years <= 0.0 {
            return 0.0;
        }
        (t_years / self.scale_years).powf(self.shape)
    }

    /// 累积失效概率 F(t)
    ///
    /// 使用 −expm1(−x) 计算 1 − exp(−x)：t=0 时精确为 0，x→∞ 时饱和为 1
    pub fn cdf(&self, t_years: f64) -> f64 {
        let x = self.cumulative_hazard(t_years);
        (-(-x).exp_m1()).clamp(0.0, 1.0)
    }

    /// 生存概率 S(t) = 1 − F(t)
    pub fn survival(&self, t_years: f64) -> f64 {
        (-self.cumulative_hazard(t_years)).exp()
    }

    /// 瞬时危险率 h(t)
    ///
    /// t=0 时: β<1 → +∞，β=1 → 1/η，β>1 → 0
    pub fn hazard(&self, t_years: f64) -> f64 {
        let t = t_years.max(0.0);
        (self.shape / self.scale_years) * (t / self.scale_years).powf(self.shape - 1.0)
    }

    /// 分位数（逆 CDF）: t = η·(−ln(1−p))^(1/β)
    ///
    /// p=1 时返回 +∞
    pub fn quantile(&self, p: f64) -> ForecastResult<f64> {
        ensure_fraction("p", p)?;
        Ok(self.scale_years * (-(-p).ln_1p()).powf(1.0 / self.shape))
    }

    /// 区间 [t0, t1] 内的条件失效比例（以 t0 时仍存活为前提）
    pub fn conditional_failure(&self, t0_years: f64, t1_years: f64) -> ForecastResult<f64> {
        ensure_non_negative("t0_years", t0_years)?;
        ensure_non_negative("t1_years", t1_years)?;
        let s0 = self.survival(t0_years);
        if s0 <= 0.0 || t1_years <= t0_years {
            return Ok(0.0);
        }
        Ok(((s0 - self.survival(t1_years)) / s0).clamp(0.0, 1.0))
    }
}

// 反序列化时走 new() 的校验，拒绝非法参数
#[derive(Deserialize)]
struct WeibullModelRaw {
    shape: f64,
    scale_years: f64,
}

impl<'de> Deserialize<'de> for WeibullModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = WeibullModelRaw::deserialize(deserializer)?;
        WeibullModel::new(raw.shape, raw.scale_years).map_err(serde::de::Error::custom)
    }
}
