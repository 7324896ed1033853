// src/error.rs
//! Error taxonomy for the analysis flow

use thiserror::Error;

/// Everything that can interrupt an analysis attempt.
///
/// All variants are recoverable: each one lands in the session's single
/// user-visible error slot and leaves the session ready for another attempt.
/// The display strings are the exact messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// A picked file was not a PDF. The previously staged input is untouched.
    #[error("Please select a valid PDF file")]
    InvalidInputKind,

    /// Submitted in file mode with nothing staged.
    #[error("Please select a PDF file")]
    MissingFile,

    /// Submitted in text mode with nothing but whitespace staged.
    #[error("Please enter resume text")]
    MissingText,

    /// The service or the transport failed. Carries the message to display,
    /// already reduced from the response body.
    #[error("{0}")]
    RequestFailed(String),
}
