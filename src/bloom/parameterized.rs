use super::{
    BloomFilter, BloomFilterConfig, BloomParams, MembershipOps, MembershipStats,
};
use crate::error::Result;
use tracing::debug;

/// Bloom filter sized from an expected element count and a target false
/// positive rate. All operations go to an inner [`BloomFilter`].
#[derive(Clone, Debug)]
pub struct ParameterizedBloomFilter {
    config: BloomFilterConfig,
    params: BloomParams,
    inner: BloomFilter,
}

impl ParameterizedBloomFilter {
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self> {
        Self::from_config(BloomFilterConfig {
            expected_items,
            false_positive_rate,
        })
    }

    /// n = 10_000, p = 0.05
    pub fn with_defaults() -> Result<Self> {
        Self::from_config(BloomFilterConfig::default())
    }

    pub fn from_config(config: BloomFilterConfig) -> Result<Self> {
        let params = BloomParams::try_from(&config)?;
        debug!(
            expected_items = config.expected_items,
            false_positive_rate = config.false_positive_rate,
            num_bits = params.num_bits,
            num_hashes = params.num_hashes,
            "derived bloom filter parameters"
        );
        let inner = BloomFilter::new(params.num_bits, params.num_hashes)?;

        Ok(Self {
            config,
            params,
            inner,
        })
    }

    pub fn add(&mut self, item: impl AsRef<[u8]>) {
        self.inner.add(item);
    }

    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        self.inner.contains(item)
    }

    pub fn expected_items(&self) -> usize {
        self.config.expected_items
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    pub fn config(&self) -> &BloomFilterConfig {
        &self.config
    }

    pub fn params(&self) -> &BloomParams {
        &self.params
    }

    pub fn inner(&self) -> &BloomFilter {
        &self.inner
    }
}

impl MembershipOps for ParameterizedBloomFilter {
    fn add(&mut self, item: &[u8]) {
        ParameterizedBloomFilter::add(self, item);
    }

    fn contains(&self, item: &[u8]) -> bool {
        ParameterizedBloomFilter::contains(self, item)
    }
}

impl MembershipStats for ParameterizedBloomFilter {
    fn num_bits(&self) -> usize {
        self.params.num_bits
    }

    fn num_hashes(&self) -> usize {
        self.params.num_hashes
    }

    fn insert_count(&self) -> usize {
        self.inner.insert_count()
    }

    fn bits_set(&self) -> usize {
        self.inner.bits_set()
    }
}
