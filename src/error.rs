use thiserror::Error;

/// Top-level error type for the polygon kernel.
#[derive(Debug, Error)]
pub enum PolysetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Clip(#[from] ClipError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A parts view was used against a set it was not built from.
    #[error("stale parts view: {0}")]
    StaleIndex(String),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("nesting node not found")]
    NodeNotFound,
}

/// Errors raised at the boundary to the boolean clipping engine.
///
/// The engine itself is exact on integer input; these errors report inputs it
/// cannot represent or outputs that cannot be mapped back onto the grid.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("coordinate {value} exceeds the supported range of +/-{max}")]
    CoordinateOutOfRange { value: i64, max: i64 },

    #[error("input extent {extent} exceeds the supported extent of {max}")]
    ExtentOutOfRange { extent: i64, max: i64 },

    #[error("clipping engine produced a non-finite coordinate")]
    NonFiniteOutput,

    #[error("invalid clipping parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to reading the textual exchange format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected} at byte {position}")]
    Expected {
        expected: &'static str,
        position: usize,
    },

    #[error("invalid number {text:?} at byte {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("ring {0} is not closed")]
    RingNotClosed(usize),
}

/// Convenience type alias for results using [`PolysetError`].
pub type Result<T> = std::result::Result<T, PolysetError>;
