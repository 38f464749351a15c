use super::{
    CmsParams, CountMinSketch, CountMinSketchConfig, FrequencyOps,
    FrequencyStats,
};
use crate::error::Result;
use tracing::debug;

/// Count-Min sketch sized from an error bound and a failure probability.
///
/// With probability at least `1 - delta`, `estimate(x)` exceeds the true
/// count of `x` by at most `epsilon * total_count()`.
#[derive(Clone, Debug)]
pub struct OptimizedCountMinSketch {
    config: CountMinSketchConfig,
    params: CmsParams,
    inner: CountMinSketch,
}

impl OptimizedCountMinSketch {
    pub fn new(epsilon: f64, delta: f64) -> Result<Self> {
        Self::from_config(CountMinSketchConfig { epsilon, delta })
    }

    pub fn from_config(config: CountMinSketchConfig) -> Result<Self> {
        let params = CmsParams::try_from(&config)?;
        debug!(
            epsilon = config.epsilon,
            delta = config.delta,
            width = params.width,
            depth = params.depth,
            "derived count-min sketch parameters"
        );
        let inner = CountMinSketch::new(params.width, params.depth)?;

        Ok(Self {
            config,
            params,
            inner,
        })
    }

    pub fn update(&mut self, item: impl AsRef<[u8]>, count: i64) -> Result<()> {
        self.inner.update(item, count)
    }

    pub fn increment(&mut self, item: impl AsRef<[u8]>) {
        self.inner.increment(item);
    }

    pub fn estimate(&self, item: impl AsRef<[u8]>) -> u64 {
        self.inner.estimate(item)
    }

    pub fn epsilon(&self) -> f64 {
        self.config.epsilon
    }

    pub fn delta(&self) -> f64 {
        self.config.delta
    }

    /// Probability that an estimate stays within [`Self::error_bound`]
    pub fn confidence(&self) -> f64 {
        1.0 - self.config.delta
    }

    /// Maximum overcount `epsilon * total_count` at the current state
    pub fn error_bound(&self) -> f64 {
        self.config.epsilon * self.inner.total_count() as f64
    }

    pub fn config(&self) -> &CountMinSketchConfig {
        &self.config
    }

    pub fn params(&self) -> &CmsParams {
        &self.params
    }

    pub fn inner(&self) -> &CountMinSketch {
        &self.inner
    }
}

impl FrequencyOps for OptimizedCountMinSketch {
    fn update(&mut self, item: &[u8], count: i64) -> Result<()> {
        OptimizedCountMinSketch::update(self, item, count)
    }

    fn increment(&mut self, item: &[u8]) {
        OptimizedCountMinSketch::increment(self, item);
    }

    fn estimate(&self, item: &[u8]) -> u64 {
        OptimizedCountMinSketch::estimate(self, item)
    }
}

impl FrequencyStats for OptimizedCountMinSketch {
    fn width(&self) -> usize {
        self.params.width
    }

    fn depth(&self) -> usize {
        self.params.depth
    }

    fn total_count(&self) -> u64 {
        self.inner.total_count()
    }
}
