//! The extension chain runner.
//!
//! Stage 1 generates a 10-second base clip; stages 2 through 4 each extend
//! the previous stage's output by 8 seconds, for a 34-second final video.
//! Each stage is polled serially -- one in-flight status request at a time --
//! with a fixed delay between polls and a per-stage attempt ceiling, after
//! which the chain is marked failed rather than polled forever. A failed
//! stage halts the chain with the upstream message; there is no automatic
//! retry and no cancellation.

use std::time::Duration;

use reelgen_core::extension::{self, StageDecision, FINAL_STAGE, FIRST_STAGE};
use reelgen_core::types::{GenerationRequest, JobStatus, Platform};
use reelgen_providers::runway::RunwayProvider;
use reelgen_providers::{ProviderError, VideoProvider};

/// Delay between successive polls of the same stage.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Maximum polls per stage before the chain is marked failed.
const DEFAULT_MAX_POLLS_PER_STAGE: u32 = 60;

/// Errors that can end an extension chain early.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A submit or poll call against the provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A stage reached a terminal failure state upstream.
    #[error("Extension chain failed at stage {stage}: {message}")]
    StageFailed { stage: u8, message: String },

    /// A stage exhausted its poll budget without reaching a terminal state.
    #[error("Extension chain timed out at stage {stage} after {attempts} polls")]
    Timeout { stage: u8, attempts: u32 },
}

/// Result of a chain that ran to completion.
#[derive(Debug, Clone)]
pub struct ChainOutcome {
    /// Provider task id of the final stage.
    pub task_id: String,
    /// Number of stages that completed (always [`FINAL_STAGE`] on success).
    pub stages_completed: u8,
    /// Playable URL of the final video, when the vendor reported one.
    pub video_url: Option<String>,
    /// Cumulative target duration of the final video.
    pub duration_secs: u32,
}

/// Runs the fixed four-stage extension chain.
pub struct ExtensionPipeline {
    poll_interval: Duration,
    max_polls_per_stage: u32,
}

impl ExtensionPipeline {
    pub fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls_per_stage: DEFAULT_MAX_POLLS_PER_STAGE,
        }
    }

    /// Override poll timing (tests use millisecond intervals).
    pub fn with_timing(poll_interval: Duration, max_polls_per_stage: u32) -> Self {
        Self {
            poll_interval,
            max_polls_per_stage,
        }
    }

    /// Run the chain to completion or failure.
    ///
    /// Stage *n+1* is submitted only after stage *n* polls `completed` with
    /// a video URL, using stage *n*'s task id as the asset to extend from.
    pub async fn run(
        &self,
        provider: &RunwayProvider,
        title: &str,
        script: &str,
        platform: Platform,
    ) -> Result<ChainOutcome, PipelineError> {
        let request = GenerationRequest {
            title: title.to_string(),
            script: script.to_string(),
            duration_secs: extension::BASE_CLIP_SECS,
            platform,
            avatar_selector: String::new(),
            background_image_url: None,
        };

        let mut stage = FIRST_STAGE;
        let mut handle = provider.submit(&request).await?;
        tracing::info!(task_id = %handle.provider_job_id, "Base generation submitted");

        loop {
            let status = self.poll_until_terminal(provider, &handle, stage).await?;

            match extension::decide(stage, &status) {
                StageDecision::Wait => unreachable!("poll_until_terminal returns terminal states"),
                StageDecision::Halt { message } => {
                    return Err(PipelineError::StageFailed { stage, message });
                }
                StageDecision::Done => {
                    tracing::info!(
                        task_id = %handle.provider_job_id,
                        stages = stage,
                        "Extension chain complete",
                    );
                    return Ok(ChainOutcome {
                        task_id: handle.provider_job_id,
                        stages_completed: stage,
                        video_url: status.video_url,
                        duration_secs: extension::target_duration_secs(FINAL_STAGE),
                    });
                }
                StageDecision::Extend { next_stage } => {
                    let submission = provider
                        .extend(&handle.provider_job_id, next_stage, title)
                        .await?;
                    tracing::info!(
                        stage = next_stage,
                        asset_id = %handle.provider_job_id,
                        task_id = %submission.handle.provider_job_id,
                        "Extension stage submitted",
                    );
                    handle = submission.handle;
                    stage = next_stage;
                }
            }
        }
    }

    /// Poll one stage until it reaches a terminal state or the attempt
    /// budget runs out.
    ///
    /// Polls are serialized: each request is awaited before the next is
    /// scheduled, with [`Self::poll_interval`] between them.
    async fn poll_until_terminal(
        &self,
        provider: &RunwayProvider,
        handle: &reelgen_core::types::JobHandle,
        stage: u8,
    ) -> Result<JobStatus, PipelineError> {
        for attempt in 1..=self.max_polls_per_stage {
            let status = provider.poll_status(handle).await?;
            if status.state.is_terminal() {
                return Ok(status);
            }
            tracing::debug!(
                stage,
                attempt,
                state = %status.state,
                "Stage still in flight, polling again",
            );
            tokio::time::sleep(self.poll_interval).await;
        }
        Err(PipelineError::Timeout {
            stage,
            attempts: self.max_polls_per_stage,
        })
    }
}

impl Default for ExtensionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
