use crate::error::{Result, SketchError};
use crate::hash::{optimal_depth, optimal_width};
use derive_builder::Builder;

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(pattern = "owned")]
pub struct CountMinSketchConfig {
    /// Additive error as a fraction of the total count
    pub epsilon: f64,

    /// Probability that an estimate exceeds the error bound
    pub delta: f64,
}

impl CountMinSketchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon < 1.0) {
            return Err(SketchError::parameter(format!(
                "Epsilon must be between 0 and 1, got {}",
                self.epsilon
            )));
        }
        if !(self.delta > 0.0 && self.delta < 1.0) {
            return Err(SketchError::parameter(format!(
                "Delta must be between 0 and 1, got {}",
                self.delta
            )));
        }
        Ok(())
    }
}

/// Table dimensions derived from a [`CountMinSketchConfig`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CmsParams {
    pub width: usize,
    pub depth: usize,
}

impl TryFrom<&CountMinSketchConfig> for CmsParams {
    type Error = SketchError;

    fn try_from(config: &CountMinSketchConfig) -> Result<Self> {
        config.validate()?;

        let width = optimal_width(config.epsilon);
        if !width.is_finite() || width >= usize::MAX as f64 {
            return Err(SketchError::parameter(format!(
                "Derived width {width} does not fit in memory (epsilon={})",
                config.epsilon
            )));
        }
        let depth = optimal_depth(config.delta);

        Ok(Self {
            width: width as usize,
            // ln(1/delta) > 0 for delta in (0, 1), but may round to 0.0
            depth: (depth as usize).max(1),
        })
    }
}

/// Computes `(width, depth)` as `(ceil(e / epsilon), ceil(ln(1 / delta)))`.
pub fn derive_cms_params(epsilon: f64, delta: f64) -> Result<CmsParams> {
    CmsParams::try_from(&CountMinSketchConfig { epsilon, delta })
}
