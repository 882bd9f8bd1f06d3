//! Shared domain types: platforms, providers, generation requests, and the
//! job handle/status pair every adapter speaks in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Target platform
// ---------------------------------------------------------------------------

/// Target publishing platform. Determines output geometry (landscape vs
/// portrait) and script pacing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
}

impl Platform {
    /// Output pixel dimensions as `(width, height)`.
    ///
    /// YouTube renders landscape, Instagram portrait.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Platform::Youtube => (1280, 720),
            Platform::Instagram => (720, 1280),
        }
    }

    /// Parse a platform string as sent by the browser.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::Youtube),
            "instagram" => Ok(Platform::Instagram),
            other => Err(CoreError::Validation(format!(
                "Unknown platform '{other}'. Must be one of: youtube, instagram"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Provider tag
// ---------------------------------------------------------------------------

/// Identifies which third-party video vendor a job belongs to.
///
/// A [`JobHandle`] is only meaningful to the provider that issued it;
/// status interpretation must never cross providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    EdenAi,
    HeyGen,
    Synthesia,
    Runway,
}

impl ProviderKind {
    /// Stable lowercase tag, used in logs and serialized handles.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::EdenAi => "edenai",
            ProviderKind::HeyGen => "heygen",
            ProviderKind::Synthesia => "synthesia",
            ProviderKind::Runway => "runway",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// A single video generation request as assembled from user input.
///
/// Immutable once handed to a provider adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub title: String,
    pub script: String,
    pub duration_secs: u32,
    pub platform: Platform,
    /// UI-facing persona selector; adapters map it to a vendor-specific
    /// avatar/voice pair, falling back to a default for unknown values.
    pub avatar_selector: String,
    pub background_image_url: Option<String>,
}

impl GenerationRequest {
    /// Validate the fields every provider requires before any network call.
    ///
    /// Fails fast with the name of the first missing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if self.script.trim().is_empty() {
            return Err(CoreError::Validation("script must not be empty".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Job handle and status
// ---------------------------------------------------------------------------

/// Provider-issued handle for a submitted generation job.
///
/// The `provider_job_id` is the only key needed to poll status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    pub provider: ProviderKind,
    pub provider_job_id: String,
    pub created_at: DateTime<Utc>,
}

impl JobHandle {
    pub fn new(provider: ProviderKind, provider_job_id: impl Into<String>) -> Self {
        Self {
            provider,
            provider_job_id: provider_job_id.into(),
            created_at: Utc::now(),
        }
    }
}

/// Internal four-state job lifecycle every vendor vocabulary collapses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobState {
    /// Terminal states end polling; non-terminal states schedule another poll.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobState::Pending => "pending",
            JobState::Processing => "processing",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Snapshot of a job as of the latest poll.
///
/// Recomputed wholesale on every poll; the latest snapshot fully replaces
/// the previous one (no merging or diffing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    pub state: JobState,
    pub video_url: Option<String>,
    pub message: String,
    /// Raw vendor payload, kept verbatim for diagnostics.
    pub raw: serde_json::Value,
}

impl JobStatus {
    pub fn new(state: JobState, video_url: Option<String>, message: impl Into<String>) -> Self {
        Self {
            state,
            video_url,
            message: message.into(),
            raw: serde_json::Value::Null,
        }
    }

    /// Attach the raw vendor payload for diagnostics.
    pub fn with_raw(mut self, raw: serde_json::Value) -> Self {
        self.raw = raw;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
