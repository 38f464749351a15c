//! Count-Min Sketch frequency estimation
pub mod config;
pub mod optimized;
pub mod sketch;
pub mod traits;

pub use config::{
    CmsParams, CountMinSketchConfig, CountMinSketchConfigBuilder,
    CountMinSketchConfigBuilderError, derive_cms_params,
};
pub use optimized::OptimizedCountMinSketch;
pub use sketch::CountMinSketch;
pub use traits::{FrequencyOps, FrequencyStats};

pub type ParameterizedCountMinSketch = OptimizedCountMinSketch;
