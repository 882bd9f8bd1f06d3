//! HTTP handlers, one module per feature area.

pub mod avatar_video;
pub mod catalog;
pub mod content;
pub mod extend_video;
pub mod presenter_video;
pub mod quick_video;
pub mod search;

use serde::Serialize;

use reelgen_core::error::CoreError;
use reelgen_core::types::{JobState, JobStatus};

use crate::error::AppError;

/// Require a non-empty string field, failing with a named validation error.
pub(crate) fn require<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AppError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        )))),
    }
}

/// Status poll response shared by every provider's status endpoint.
#[derive(Debug, Serialize)]
pub struct PollResponse {
    pub status: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub message: String,
}

impl From<JobStatus> for PollResponse {
    fn from(status: JobStatus) -> Self {
        Self {
            status: status.state,
            video_url: status.video_url,
            message: status.message,
        }
    }
}
