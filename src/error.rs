//! Error types for encoding and dataset extraction

/// Errors raised while decoding bitboards or extracting samples from PGN
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A bitboard set did not hold exactly one mask per slot
    #[error("expected 12 bitboards, got {len}")]
    InvalidInput { len: usize },

    /// A mainline move could not be played from the current position
    #[error("illegal move {san} at ply {ply}")]
    IllegalMove { ply: usize, san: String },

    /// An `[%eval ...]` annotation whose value is not a number
    #[error("malformed eval annotation {text:?} at ply {ply}")]
    MalformedAnnotation { ply: usize, text: String },

    /// Reading the PGN stream failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
