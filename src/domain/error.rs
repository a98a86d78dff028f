use thiserror::Error;

/// Errors raised while rendering an automaton
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// Width and height must both be at least 1.
    #[error("invalid raster dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: usize, height: usize },
    /// Random initial rows need a density in [0, 1].
    #[error("invalid seed density {0}: must be within [0, 1]")]
    InvalidDensity(f64),
    /// The render observed the cancellation flag.
    #[error("rendering cancelled")]
    Cancelled,
}
