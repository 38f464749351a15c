use thiserror::Error;

pub type Result<T> = std::result::Result<T, SketchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SketchError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SketchError {
    pub(crate) fn parameter(msg: impl Into<String>) -> Self {
        SketchError::InvalidParameter(msg.into())
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SketchError::InvalidParameter(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SketchError::InvalidArgument(_))
    }
}
