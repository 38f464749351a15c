use crate::error::{Result, SketchError};
use crate::hash::{optimal_bit_vector_size, optimal_num_hashes};
use derive_builder::Builder;
use tracing::warn;

pub const DEFAULT_EXPECTED_ITEMS: usize = 10_000;
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.05;

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(pattern = "owned")]
pub struct BloomFilterConfig {
    /// Expected number of elements (n)
    #[builder(default = "DEFAULT_EXPECTED_ITEMS")]
    pub expected_items: usize,

    /// Target false positive rate (p), strictly between 0 and 1
    #[builder(default = "DEFAULT_FALSE_POSITIVE_RATE")]
    pub false_positive_rate: f64,
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self {
            expected_items: DEFAULT_EXPECTED_ITEMS,
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
        }
    }
}

impl BloomFilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.expected_items == 0 {
            return Err(SketchError::parameter("Expected items must be > 0"));
        }
        // Negated so that NaN is rejected too
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(SketchError::parameter(format!(
                "FPR must be between 0 and 1, got {}",
                self.false_positive_rate
            )));
        }
        Ok(())
    }
}

/// Bit count (m) and hash count (k) derived from a [`BloomFilterConfig`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BloomParams {
    pub num_bits: usize,
    pub num_hashes: usize,
}

impl TryFrom<&BloomFilterConfig> for BloomParams {
    type Error = SketchError;

    fn try_from(config: &BloomFilterConfig) -> Result<Self> {
        config.validate()?;

        let n = config.expected_items;
        let p = config.false_positive_rate;

        let raw_bits = optimal_bit_vector_size(n, p);
        let rounded_bits = raw_bits.round_ties_even();
        if !rounded_bits.is_finite() || rounded_bits >= usize::MAX as f64 {
            return Err(SketchError::parameter(format!(
                "Derived bit count {raw_bits} does not fit in memory (n={n}, p={p})"
            )));
        }
        let mut num_bits = rounded_bits as usize;
        if num_bits == 0 {
            warn!(n, p, "derived bit count rounded to 0, clamping to 1");
            num_bits = 1;
        }

        // k is taken from the unrounded m
        let mut num_hashes =
            optimal_num_hashes(n, raw_bits).round_ties_even() as usize;
        if num_hashes == 0 {
            warn!(n, p, "derived hash count rounded to 0, clamping to 1");
            num_hashes = 1;
        }

        Ok(Self {
            num_bits,
            num_hashes,
        })
    }
}

/// Computes `(m, k)` for `n` expected items at false positive rate `p`.
///
/// Both values are rounded half to even and clamped to at least 1.
pub fn derive_bloom_params(n: usize, p: f64) -> Result<BloomParams> {
    BloomParams::try_from(&BloomFilterConfig {
        expected_items: n,
        false_positive_rate: p,
    })
}
