use core::fmt;

/// Specific kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is shorter than the fixed marker-plus-salt prefix.
    TooShort,
    /// Input does not start with the `Salted__` marker.
    MagicMismatch,
}

/// Error returned by parsing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte position in the input where the error was detected.
    ///
    /// For `TooShort` this is the input length; for `MagicMismatch` it is
    /// the offset of the first byte that differs from the marker.
    pub position: usize,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            ParseErrorKind::TooShort => "envelope too short",
            ParseErrorKind::MagicMismatch => "Salted__ marker mismatch",
        };
        write!(f, "{} at byte {}", desc, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Specific kind of build error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// Output buffer is too small.
    BufferTooSmall,
}

/// Error returned by builder functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildError {
    pub kind: BuildErrorKind,
}

impl BuildError {
    #[must_use]
    pub fn buffer_too_small() -> Self {
        Self {
            kind: BuildErrorKind::BufferTooSmall,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BuildErrorKind::BufferTooSmall => write!(f, "output buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
