//! Validation errors for pattern parameters and gradients.

/// Errors raised when a parameter set or gradient cannot produce a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Fewer than two bumps per ring.
    BumpCountTooSmall(u32),
    /// A pattern needs at least one ring.
    RingCountZero,
    /// Rotation period below 4 leaves no room for a ramp.
    RotationPeriodTooSmall(u32),
    /// Rotation period must split into two equal halves.
    RotationPeriodOdd(u32),
    /// Rotation offset outside [0, 2π] or not finite.
    RotationOffsetOutOfRange(f64),
    /// A length-like parameter that must be finite and strictly positive.
    NonPositive { field: &'static str, value: f64 },
    /// Bump width over 2 would put the first ring's inner vertices at a
    /// negative radius.
    BumpWidthTooLarge(f64),
    /// A ring needs at least two vertices.
    VertexCountTooSmall(usize),
    /// A gradient needs at least one stop.
    EmptyGradient,
    /// Stop position not finite or outside [0, 1].
    InvalidStop(f32),
    /// Colour component outside [0, 1], or a hex string that does not parse.
    InvalidColor(String),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::BumpCountTooSmall(n) => {
                write!(f, "bump count must be at least 2, got {}", n)
            }
            PatternError::RingCountZero => write!(f, "ring count must be at least 1"),
            PatternError::RotationPeriodTooSmall(n) => {
                write!(f, "rotation period must be at least 4, got {}", n)
            }
            PatternError::RotationPeriodOdd(n) => {
                write!(f, "rotation period must be even, got {}", n)
            }
            PatternError::RotationOffsetOutOfRange(v) => {
                write!(f, "rotation offset must lie in [0, 2π], got {}", v)
            }
            PatternError::NonPositive { field, value } => {
                write!(f, "{} must be a positive number, got {}", field, value)
            }
            PatternError::BumpWidthTooLarge(w) => {
                write!(f, "bump width must be at most 2, got {}", w)
            }
            PatternError::VertexCountTooSmall(n) => {
                write!(f, "ring needs at least 2 vertices, got {}", n)
            }
            PatternError::EmptyGradient => write!(f, "gradient has no color stops"),
            PatternError::InvalidStop(pos) => {
                write!(f, "gradient stop position must lie in [0, 1], got {}", pos)
            }
            PatternError::InvalidColor(msg) => write!(f, "invalid color: {}", msg),
        }
    }
}

impl std::error::Error for PatternError {}

/// Result type for pattern generation.
pub type PatternResult<T> = Result<T, PatternError>;
