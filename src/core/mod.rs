// src/core/mod.rs
//! Core services behind the analysis session

pub mod service_client;

pub use service_client::{AnalysisClient, AnalysisPayload};
