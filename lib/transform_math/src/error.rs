use thiserror::Error;

/// Degenerate-geometry failures.
///
/// None of these are fatal. They mean the inputs don't describe a usable transform, and the
/// value the operation was called on has been left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A vector with zero length was normalized, or used as a rotation axis.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// A vector or angle with an infinite or NaN component.
    #[error("cannot build a transform from non-finite input")]
    NonFinite,

    /// The matrix has no inverse.
    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: f32 },

    /// Projection bounds that would divide by zero or put the eye behind the near plane.
    #[error("degenerate projection: {0}")]
    DegenerateProjection(&'static str),

    /// A look-at whose basis vectors can't be built.
    #[error("degenerate view: {0}")]
    DegenerateView(&'static str),
}
