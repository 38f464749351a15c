use crate::error::Result;

/// Core frequency operations, object safe over raw bytes
pub trait FrequencyOps {
    /// Adds `count` occurrences; negative counts are rejected
    fn update(&mut self, item: &[u8], count: i64) -> Result<()>;
    fn increment(&mut self, item: &[u8]);
    fn estimate(&self, item: &[u8]) -> u64;
}

pub trait FrequencyStats {
    fn width(&self) -> usize;
    fn depth(&self) -> usize;
    /// Sum of all counts applied so far
    fn total_count(&self) -> u64;
}
