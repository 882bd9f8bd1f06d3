//! Extension chain orchestration.
//!
//! Drives the fixed four-stage sequence (one base generation plus three
//! 8-second extensions) against the extension-capable provider, polling
//! between stages.

pub mod extension;

pub use extension::{ChainOutcome, ExtensionPipeline, PipelineError};
