use super::{FrequencyOps, FrequencyStats};
use crate::error::{Result, SketchError};
use crate::hash::hash_indices;
use tracing::debug;

/// Count-Min sketch with `depth` rows of `width` counters.
///
/// Row `i` is addressed by the `i`-th hash of the item. Estimates never
/// undercount, since counters only grow.
#[derive(Clone)]
pub struct CountMinSketch {
    width: usize,
    depth: usize,
    counters: Vec<Vec<u64>>,
    total_count: u64,
}

impl CountMinSketch {
    pub fn new(width: usize, depth: usize) -> Result<Self> {
        if width == 0 {
            return Err(SketchError::parameter("Width must be > 0"));
        }
        if depth == 0 {
            return Err(SketchError::parameter("Depth must be > 0"));
        }
        let max_cells = isize::MAX as usize / std::mem::size_of::<u64>();
        match width.checked_mul(depth) {
            Some(cells) if cells <= max_cells => {}
            _ => {
                return Err(SketchError::parameter(format!(
                    "Counter table {depth}x{width} is too large"
                )));
            }
        }

        debug!(width, depth, "created count-min sketch");

        Ok(Self {
            width,
            depth,
            counters: vec![vec![0u64; width]; depth],
            total_count: 0,
        })
    }

    /// Adds `count` occurrences of `item`.
    ///
    /// Fails with `InvalidArgument` for a negative `count`, leaving the
    /// counters untouched.
    pub fn update(&mut self, item: impl AsRef<[u8]>, count: i64) -> Result<()> {
        if count < 0 {
            return Err(SketchError::InvalidArgument(format!(
                "Count must be >= 0, got {count}"
            )));
        }
        self.apply(item.as_ref(), count as u64);
        Ok(())
    }

    /// Same as `update(item, 1)`.
    pub fn increment(&mut self, item: impl AsRef<[u8]>) {
        self.apply(item.as_ref(), 1);
    }

    /// Minimum over the `depth` counters the item hashes to.
    pub fn estimate(&self, item: impl AsRef<[u8]>) -> u64 {
        hash_indices(item.as_ref(), self.depth, self.width)
            .zip(&self.counters)
            .map(|(idx, row)| row[idx])
            .min()
            .unwrap_or(0)
    }

    fn apply(&mut self, item: &[u8], count: u64) {
        for (idx, row) in hash_indices(item, self.depth, self.width)
            .zip(self.counters.iter_mut())
        {
            row[idx] = row[idx].saturating_add(count);
        }
        self.total_count = self.total_count.saturating_add(count);
    }
}

impl FrequencyOps for CountMinSketch {
    fn update(&mut self, item: &[u8], count: i64) -> Result<()> {
        CountMinSketch::update(self, item, count)
    }

    fn increment(&mut self, item: &[u8]) {
        CountMinSketch::increment(self, item);
    }

    fn estimate(&self, item: &[u8]) -> u64 {
        CountMinSketch::estimate(self, item)
    }
}

impl FrequencyStats for CountMinSketch {
    fn width(&self) -> usize {
        self.width
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn total_count(&self) -> u64 {
        self.total_count
    }
}

impl std::fmt::Debug for CountMinSketch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CountMinSketch {{ width: {}, depth: {}, total_count: {} }}",
            self.width, self.depth, self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sketch_is_zeroed() {
        let sketch = CountMinSketch::new(16, 4).unwrap();
        assert_eq!(sketch.counters.len(), 4);
        assert!(sketch.counters.iter().all(|row| row.len() == 16));
        assert!(sketch.counters.iter().flatten().all(|&c| c == 0));
        assert_eq!(sketch.estimate("missing"), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(CountMinSketch::new(0, 3).unwrap_err().is_invalid_parameter());
        assert!(CountMinSketch::new(10, 0).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_oversized_table_rejected() {
        assert!(
            CountMinSketch::new(usize::MAX, 2)
                .unwrap_err()
                .is_invalid_parameter()
        );
    }

    #[test]
    fn test_update_touches_every_row() {
        let mut sketch = CountMinSketch::new(50, 6).unwrap();
        sketch.update("kiwi", 4).unwrap();
        for (row, idx) in hash_indices(b"kiwi", 6, 50).enumerate() {
            assert_eq!(sketch.counters[row][idx], 4);
        }
        assert_eq!(sketch.total_count(), 4);
    }

    #[test]
    fn test_negative_count_leaves_sketch_unchanged() {
        let mut sketch = CountMinSketch::new(20, 3).unwrap();
        sketch.update("plum", 2).unwrap();
        let before = sketch.counters.clone();

        let err = sketch.update("plum", -1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(sketch.counters, before);
        assert_eq!(sketch.estimate("plum"), 2);
        assert_eq!(sketch.total_count(), 2);
    }

    #[test]
    fn test_zero_count_is_noop() {
        let mut sketch = CountMinSketch::new(20, 3).unwrap();
        sketch.update("fig", 0).unwrap();
        assert_eq!(sketch.estimate("fig"), 0);
    }

    #[test]
    fn test_counters_saturate() {
        let mut sketch = CountMinSketch::new(4, 2).unwrap();
        sketch.update("big", i64::MAX).unwrap();
        sketch.update("big", i64::MAX).unwrap();
        sketch.update("big", i64::MAX).unwrap();
        assert_eq!(sketch.estimate("big"), u64::MAX);
        assert_eq!(sketch.total_count(), u64::MAX);
    }

    #[test]
    fn test_single_column_counts_everything() {
        let mut sketch = CountMinSketch::new(1, 3).unwrap();
        sketch.update("a", 2).unwrap();
        sketch.update("b", 5).unwrap();
        assert_eq!(sketch.estimate("a"), 7);
        assert_eq!(sketch.estimate("never"), 7);
    }
}
