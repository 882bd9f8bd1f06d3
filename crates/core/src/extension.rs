//! Extension chain constants, stage arithmetic, and transition decisions.
//!
//! The extension-capable provider generates a 10-second base clip which is
//! then lengthened three times by 8 seconds each, for a 34-second final
//! video. Stage numbers run 1 (base) through 4 (final extension); stage *n*
//! consumes the job id produced by stage *n−1* as its asset id.

use crate::error::CoreError;
use crate::types::{JobState, JobStatus};

// ---------------------------------------------------------------------------
// Stage budget
// ---------------------------------------------------------------------------

/// Length of the base clip produced by stage 1, in seconds.
pub const BASE_CLIP_SECS: u32 = 10;
/// Seconds added by each extension stage.
pub const EXTENSION_INCREMENT_SECS: u32 = 8;
/// First stage (base generation).
pub const FIRST_STAGE: u8 = 1;
/// Last stage; the chain is terminal once stage 4 completes.
pub const FINAL_STAGE: u8 = 4;

/// Cumulative target duration after `stage` completes: 10 / 18 / 26 / 34.
pub fn target_duration_secs(stage: u8) -> u32 {
    BASE_CLIP_SECS + EXTENSION_INCREMENT_SECS * (stage.saturating_sub(1) as u32)
}

/// The stage following `stage`, or `None` once the chain is complete.
pub fn next_stage(stage: u8) -> Option<u8> {
    if stage < FINAL_STAGE {
        Some(stage + 1)
    } else {
        None
    }
}

/// Validate a stage number for an extension request.
///
/// Only stages 2 through 4 are valid extension targets; stage 1 is the base
/// generation and has no asset to extend from.
pub fn validate_extension_stage(stage: u8) -> Result<(), CoreError> {
    if (FIRST_STAGE + 1..=FINAL_STAGE).contains(&stage) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid extension stage {stage}. Must be between 2 and {FINAL_STAGE}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Extension step
// ---------------------------------------------------------------------------

/// One validated step of the extension workflow.
///
/// Stage *n*'s `asset_id` is the provider job id produced by stage *n−1*,
/// so only stages 2 through 4 can be constructed; the base generation has
/// no asset to extend from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionStage {
    pub stage: u8,
    pub asset_id: String,
    pub target_duration_secs: u32,
}

impl ExtensionStage {
    pub fn new(stage: u8, asset_id: impl Into<String>) -> Result<Self, CoreError> {
        validate_extension_stage(stage)?;
        let asset_id = asset_id.into();
        if asset_id.trim().is_empty() {
            return Err(CoreError::Validation("asset_id must not be empty".into()));
        }
        Ok(Self {
            target_duration_secs: target_duration_secs(stage),
            stage,
            asset_id,
        })
    }
}

// ---------------------------------------------------------------------------
// Continuation prompts
// ---------------------------------------------------------------------------

/// Short human-readable label for an extension stage.
pub fn stage_description(stage: u8) -> String {
    format!(
        "Extension stage {stage} of {FINAL_STAGE} (target {}s)",
        target_duration_secs(stage)
    )
}

/// Narrative continuation prompt for `stage`, derived from the original
/// title.
///
/// Each 8-second segment gets its own beat (development, escalation,
/// resolution) so the extended video reads as a continuation rather than a
/// repeat of the base clip.
pub fn continuation_prompt(title: &str, stage: u8) -> String {
    match stage {
        2 => format!(
            "Continue the scene about {title}: develop the idea further with \
             a new supporting detail, keeping the same visual style"
        ),
        3 => format!(
            "Continue the scene about {title}: raise the intensity and move \
             toward the key moment, keeping the same visual style"
        ),
        _ => format!(
            "Conclude the scene about {title}: resolve the story with a \
             clear closing shot, keeping the same visual style"
        ),
    }
}

// ---------------------------------------------------------------------------
// Transition decision
// ---------------------------------------------------------------------------

/// What the orchestrator should do after observing a poll result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageDecision {
    /// Job still in flight; poll again after the fixed delay.
    Wait,
    /// Stage completed with a playable URL and more stages remain; submit
    /// the next stage using the completed stage's job id as the asset id.
    Extend { next_stage: u8 },
    /// Final stage completed; the chain is done.
    Done,
    /// Stage failed (or completed without a URL to extend from); halt and
    /// surface the message.
    Halt { message: String },
}

/// Decide the chain transition for `stage` given its latest poll snapshot.
///
/// Stage *n+1* may only fire on a `completed` poll carrying a non-null
/// video URL; completion without a URL cannot seed the next stage and
/// halts the chain.
pub fn decide(stage: u8, status: &JobStatus) -> StageDecision {
    match status.state {
        JobState::Pending | JobState::Processing => StageDecision::Wait,
        JobState::Failed => StageDecision::Halt {
            message: status.message.clone(),
        },
        JobState::Completed => {
            if status.video_url.is_none() && stage < FINAL_STAGE {
                return StageDecision::Halt {
                    message: format!(
                        "Stage {stage} completed without a video URL; cannot extend"
                    ),
                };
            }
            match next_stage(stage) {
                Some(next) => StageDecision::Extend { next_stage: next },
                None => StageDecision::Done,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
