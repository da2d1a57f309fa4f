//! Error taxonomy for the compression core.
//!
//! The reference implementation (a C library) encodes errors as sentinel
//! integers above a fixed threshold, with a helper to extract a "kind" and
//! another to render a message string. In Rust the sentinel and the kind
//! are the same thing: [`CmpError`] is returned directly via `Result`, and
//! [`CmpError::as_str`] supplies the stable message string for callers
//! (the CLI) that want to print one.

use std::fmt;

/// Every way a core operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpError {
    // ── Parameter validation ────────────────────────────────────────────
    ContextInvalid,
    ParamsInvalid,
    WorkBufNull,
    WorkBufTooSmall,
    WorkBufUnaligned,
    DestinationNull,
    DestinationUnaligned,
    SourceNull,
    SourceSizeWrong,

    // ── Runtime ─────────────────────────────────────────────────────────
    DestinationTooSmall,
    SourceSizeMismatch,
    TimestampInvalid,
    HeaderCompressedTooLarge,
    HeaderOriginalTooLarge,

    // ── Internal (programmer errors) ───────────────────────────────────
    Header,
    Encoder,
    Bitstream,

    // ── Generic ─────────────────────────────────────────────────────────
    Generic,
}

impl CmpError {
    /// Stable, human-readable message. Equivalent to the reference's
    /// `error_message_of` lookup table.
    pub fn as_str(self) -> &'static str {
        match self {
            CmpError::ContextInvalid => "context is invalid or uninitialized",
            CmpError::ParamsInvalid => "compression parameters are invalid",
            CmpError::WorkBufNull => "work buffer is required but was null",
            CmpError::WorkBufTooSmall => "work buffer is smaller than required",
            CmpError::WorkBufUnaligned => "work buffer is not 4-byte aligned",
            CmpError::DestinationNull => "destination buffer is null",
            CmpError::DestinationUnaligned => "destination buffer is not 8-byte aligned",
            CmpError::SourceNull => "sample source is null",
            CmpError::SourceSizeWrong => "sample source size is zero or not a multiple of 2",
            CmpError::DestinationTooSmall => "destination buffer is too small",
            CmpError::SourceSizeMismatch => "sample count differs from the locked model size",
            CmpError::TimestampInvalid => "clock returned a timestamp wider than 48 bits",
            CmpError::HeaderCompressedTooLarge => "compressed_size exceeds the 24-bit header field",
            CmpError::HeaderOriginalTooLarge => "original_size exceeds the 24-bit header field",
            CmpError::Header => "internal header codec error",
            CmpError::Encoder => "internal entropy encoder error",
            CmpError::Bitstream => "internal bitstream writer error",
            CmpError::Generic => "unclassified fault",
        }
    }
}

impl fmt::Display for CmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for CmpError {}

/// Convenience alias used throughout the core.
pub type CmpResult<T> = Result<T, CmpError>;
