//! Execution parameters for the built-in kernel engine.

/// Parallel-loop parameters of the built-in engine.
///
/// | Parameter | Purpose | Default |
/// |-----------|---------|---------|
/// | `chunk_size` | Minimum contiguous index range a worker takes | 1024 |
/// | `parallel_threshold` | Vectors shorter than this run serially | 8192 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum number of elements handed to one rayon task.
    pub chunk_size: usize,
    /// Vector length below which kernels skip the thread pool.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            parallel_threshold: 8192,
        }
    }
}

impl EngineConfig {
    /// Configuration that never uses the thread pool.
    pub fn serial() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Set the minimum chunk length (clamped to at least 1).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the serial/parallel cut-over length.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a vector of length `n` should run on the thread pool.
    #[inline]
    pub fn runs_parallel(&self, n: usize) -> bool {
        cfg!(feature = "parallel") && n >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.chunk_size, 1024);
        assert!(!cfg.runs_parallel(16));
    }

    #[test]
    fn test_serial_config_never_parallel() {
        assert!(!EngineConfig::serial().runs_parallel(usize::MAX - 1));
    }

    #[test]
    fn test_builder_clamps_chunk_size() {
        let cfg = EngineConfig::default()
            .with_chunk_size(0)
            .with_parallel_threshold(1);
        assert_eq!(cfg.chunk_size, 1);
        assert_eq!(cfg.runs_parallel(1), cfg!(feature = "parallel"));
    }
}
