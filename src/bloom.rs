//! Standard Bloom Filter implementation
pub mod config;
pub mod filter;
pub mod parameterized;
pub mod traits;

pub use config::{
    BloomFilterConfig, BloomFilterConfigBuilder, BloomFilterConfigBuilderError,
    BloomParams, DEFAULT_EXPECTED_ITEMS, DEFAULT_FALSE_POSITIVE_RATE,
    derive_bloom_params,
};
pub use filter::BloomFilter;
pub use parameterized::ParameterizedBloomFilter;
pub use traits::{BulkMembershipOps, MembershipOps, MembershipStats};
