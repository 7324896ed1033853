// src/lib.rs
//! Client for a remote resume analysis service: input staging, a submission
//! state machine, and rendering of the structured result.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod types;
pub mod utils;

pub use crate::core::{AnalysisClient, AnalysisPayload};
pub use crate::error::AnalyzeError;
pub use crate::input::{FileCandidate, InputMode, StagedInput};
pub use crate::render::Report;
pub use crate::session::{RequestPhase, Session, SessionEvent, SessionState};
pub use crate::types::analysis::AnalysisResult;
