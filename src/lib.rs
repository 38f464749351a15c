//! Bloom filter and Count-Min sketch over a SHA-256 hash family.
//!
//! HowTo:
//!    * Hash family: the `i`-th hash of an item is SHA-256 over the item bytes
//!      followed by the decimal text of `i`, read as a 256-bit big-endian
//!      integer. Reducing it modulo the table size gives the `i`-th index.
//!    * Bloom filter: `k` indices into an `m`-bit array. `add` sets them,
//!      `contains` checks them. No false negatives.
//!    * Count-Min sketch: one index per row of a `depth x width` table.
//!      `update` adds to every row, `estimate` takes the minimum. Never
//!      undercounts.
//!
//! Sizing:
//!     * [`ParameterizedBloomFilter`] derives `m` and `k` from an expected
//!       element count `n` and a target false positive rate `p`.
//!     * [`OptimizedCountMinSketch`] derives `width = ceil(e / epsilon)` and
//!       `depth = ceil(ln(1 / delta))`.
//!
//! ```
//! use digest_sketches::{BloomFilter, CountMinSketch};
//!
//! let mut bloom = BloomFilter::new(1_000, 3)?;
//! bloom.add("apple");
//! assert!(bloom.contains("apple"));
//!
//! let mut cms = CountMinSketch::new(100, 5)?;
//! cms.update("apple", 3)?;
//! assert!(cms.estimate("apple") >= 3);
//! # Ok::<(), digest_sketches::SketchError>(())
//! ```
//!
//! Items are hashed by their bytes, so the same logical item must always be
//! passed with the same byte representation.

pub mod bloom;
pub mod cms;
mod error;
pub mod hash;

pub use bloom::{
    BloomFilter, BloomFilterConfig, BloomFilterConfigBuilder, BloomParams,
    BulkMembershipOps, MembershipOps, MembershipStats, ParameterizedBloomFilter,
    derive_bloom_params,
};
pub use cms::{
    CmsParams, CountMinSketch, CountMinSketchConfig,
    CountMinSketchConfigBuilder, FrequencyOps, FrequencyStats,
    OptimizedCountMinSketch, ParameterizedCountMinSketch, derive_cms_params,
};
pub use error::{Result, SketchError};
pub use hash::{Digest256, hash_item};
