use thiserror::Error;

/// Errors raised by strip configuration and mark accessors.
///
/// These signal integrator bugs (bad configuration, stale indices), not
/// runtime input: "pointer over no cell" and "dialog cancelled" are plain
/// `None`s and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DegradeeError {
    #[error("cell count {requested} out of range ({min}, {max})")]
    CellCountOutOfRange { requested: usize, min: usize, max: usize },

    #[error("cell index {index} out of bounds for a strip of {len} cells")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("ratio {ratio} resolves outside a strip of {len} cells")]
    RatioOutOfRange { ratio: f64, len: usize },
}
