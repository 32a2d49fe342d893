use std::time::Instant;

/// 性能统计 Guard：记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = procurement_risk_mock::perf::PerfGuard::new("fetch_contracts");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        tracing::debug!(
            target: "perf",
            op = self.op,
            elapsed_ms = self.elapsed_ms(),
            "done"
        );
    }
}
