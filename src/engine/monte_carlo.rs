// ==========================================
// Right-to-Repair 备件责任预测 - Monte Carlo 末次采购模拟
// ==========================================
// 方法: 对每个场景抽取 install_base 个独立 Weibull 失效时间
//       (逆 CDF 采样 t = η·(−ln(1−U))^(1/β))，统计落在窗口内的数量
// 输出: 失效数的经验分布 (均值 / P50 / P95) 与 P95 订货量
// ==========================================
// 红线: 随机性只经由 UniformSampler 注入，预测核心保持纯函数
// ==========================================

use crate::domain::error::{ForecastError, ForecastResult};
use crate::domain::forecast::ForecastRequest;
use crate::domain::procurement::MonteCarloSummary;
use crate::domain::weibull::WeibullModel;
use crate::engine::buffer::{BufferPolicy, LinearServiceLevelBuffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// 默认场景数
pub const DEFAULT_SCENARIOS: usize = 2_000;

/// 默认随机种子
pub const DEFAULT_SEED: u64 = 42;

// ==========================================
// Trait: UniformSampler
// ==========================================
/// 均匀分布样本提供者，返回 [0, 1) 内的数
pub trait UniformSampler {
    fn next_uniform(&mut self) -> f64;
}

/// 基于种子的可复现采样器
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSampler for SeededSampler {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// ==========================================
// MonteCarloSimulator - 随机末次采购模拟器
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloSimulator {
    scenarios: usize,
    seed: u64,
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self {
            scenarios: DEFAULT_SCENARIOS,
            seed: DEFAULT_SEED,
        }
    }
}

impl MonteCarloSimulator {
    /// 创建模拟器
    ///
    /// # 返回
    /// - Err(ForecastError::InvalidParameter): scenarios = 0
    pub fn new(scenarios: usize, seed: u64) -> ForecastResult<Self> {
        if scenarios == 0 {
            return Err(ForecastError::invalid("scenarios", 0.0, "模拟场景数必须 ≥ 1"));
        }
        Ok(Self { scenarios, seed })
    }

    pub fn scenarios(&self) -> usize {
        self.scenarios
    }

    /// 使用种子采样器与线性缓冲模拟
    pub fn simulate(&self, request: &ForecastRequest) -> ForecastResult<MonteCarloSummary> {
        let buffer_factor =
            LinearServiceLevelBuffer::default().buffer_factor(request.service_level_target_pct);
        let mut sampler = SeededSampler::new(self.seed);
        self.simulate_with(request, buffer_factor, &mut sampler)
    }

    /// 使用指定采样器模拟
    ///
    /// 成本: O(scenarios × install_base) 次采样
    #[instrument(skip(self, request, sampler), fields(scenarios = self.scenarios, install_base = request.install_base))]
    pub fn simulate_with<S: UniformSampler + ?Sized>(
        &self,
        request: &ForecastRequest,
        buffer_factor: f64,
        sampler: &mut S,
    ) -> ForecastResult<MonteCarloSummary> {
        request.validate()?;
        if !(buffer_factor >= 1.0) || !buffer_factor.is_finite() {
            return Err(ForecastError::invalid(
                "buffer_factor",
                buffer_factor,
                "缓冲系数必须为 ≥ 1 的有限数",
            ));
        }

        let counts: Vec<u64> = (0..self.scenarios)
            .map(|_| {
                count_failures_within(
                    &request.model,
                    request.install_base,
                    request.horizon_years,
                    sampler,
                )
            })
            .collect();

        let summary = MonteCarloSummary::from_counts(
            counts,
            request.install_base,
            request.horizon_years,
            buffer_factor,
        )?;

        tracing::info!(
            mean = summary.mean_failures,
            p95 = summary.p95_failures,
            p95_order_quantity = summary.p95_order_quantity,
            "Monte Carlo 模拟完成"
        );

        Ok(summary)
    }
}

/// 单个场景: 抽取 install_base 个失效时间，统计 t ≤ horizon 的数量
fn count_failures_within<S: UniformSampler + ?Sized>(
    model: &WeibullModel,
    install_base: u64,
    horizon_years: f64,
    sampler: &mut S,
) -> u64 {
    let inv_shape = 1.0 / model.shape();
    (0..install_base)
        .filter(|_| {
            let u = sampler.next_uniform();
            // −ln(1−U)，U ∈ [0,1) 时恒为有限非负数
            let t = model.scale_years() * (-(-u).ln_1p()).powf(inv_shape);
            t <= horizon_years
        })
        .count() as u64
}
