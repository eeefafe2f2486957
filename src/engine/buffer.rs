// ==========================================
// Right-to-Repair 备件责任预测 - 服务水平缓冲策略
// ==========================================
// 职责: 把服务水平目标换算为需求缓冲系数
// 规则: 缓冲只加不减（系数下限 1.0）
// ==========================================

/// 默认参考服务水平（%）
pub const REFERENCE_SERVICE_LEVEL_PCT: f64 = 85.0;

// ==========================================
// Trait: BufferPolicy
// ==========================================
/// 缓冲策略接口
///
/// 输入服务水平目标（%），输出作用于期望失效数的乘数
pub trait BufferPolicy: Send + Sync {
    fn buffer_factor(&self, service_level_target_pct: f64) -> f64;
}

// ==========================================
// LinearServiceLevelBuffer - 线性缓冲
// ==========================================
/// buffer_factor = max(1.0, 1 + (target − reference) / 100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearServiceLevelBuffer {
    pub reference_pct: f64,
}

impl Default for LinearServiceLevelBuffer {
    fn default() -> Self {
        Self {
            reference_pct: REFERENCE_SERVICE_LEVEL_PCT,
        }
    }
}

impl BufferPolicy for LinearServiceLevelBuffer {
    fn buffer_factor(&self, service_level_target_pct: f64) -> f64 {
        let factor = 1.0 + (service_level_target_pct - self.reference_pct) / 100.0;
        factor.max(1.0)
    }
}

impl<F> BufferPolicy for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn buffer_factor(&self, service_level_target_pct: f64) -> f64 {
        self(service_level_target_pct)
    }
}
