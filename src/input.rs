// src/input.rs
//! Input staging: which mode is active and what is ready to submit

use std::fmt;

/// Media type required of staged files.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// The two ways a resume can be provided. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    File,
    Text,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::File => write!(f, "📁 PDF upload"),
            InputMode::Text => write!(f, "📝 Paste text"),
        }
    }
}

/// A file picked for upload: name, media type and content, held in memory
/// until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl FileCandidate {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

/// What is currently prepared for submission but not yet sent.
///
/// The tag always agrees with the active mode because switching modes
/// discards the staged input; a staged file is always a PDF because staging
/// rejects anything else. Staged text may be empty while the user is still
/// typing; emptiness is checked at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedInput {
    File(FileCandidate),
    Text(String),
}

impl StagedInput {
    pub fn mode(&self) -> InputMode {
        match self {
            StagedInput::File(_) => InputMode::File,
            StagedInput::Text(_) => InputMode::Text,
        }
    }
}
