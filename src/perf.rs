use std::cell::Cell;
use std::time::Instant;

/// 性能统计 Guard：记录 elapsed_ms + 处理的采样点/场景数
///
/// 使用方式：
/// ```ignore
/// let perf = rtr_forecaster::perf::PerfGuard::new("run_liability_forecast");
/// perf.record_points(series.len());
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    points: Cell<usize>,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            points: Cell::new(0),
        }
    }

    /// 累加处理量
    pub fn record_points(&self, n: usize) {
        self.points.set(self.points.get().saturating_add(n));
    }

    pub fn points(&self) -> usize {
        self.points.get()
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        let points = self.points.get();

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            points,
            "done"
        );
    }
}
