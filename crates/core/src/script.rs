//! Script shaping rules applied before vendor submission.
//!
//! The quick (low-fidelity) provider accepts at most 512 characters, so
//! longer scripts are cut to exactly that length with a trailing ellipsis
//! marker. The presenter provider bills by render time, so scripts are cut
//! to what fits the requested duration at spoken pace.

use crate::types::Platform;

// ---------------------------------------------------------------------------
// Quick-path truncation
// ---------------------------------------------------------------------------

/// Maximum script length accepted by the quick video provider, including
/// the ellipsis marker.
pub const QUICK_SCRIPT_MAX_CHARS: usize = 512;

/// Marker appended when a script is cut for the quick path.
pub const TRUNCATION_MARKER: &str = "...";

/// Result of a truncation pass: the submitted script plus whether it was cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedScript {
    pub script: String,
    pub truncated: bool,
}

/// Cut a script to exactly [`QUICK_SCRIPT_MAX_CHARS`] characters for the
/// quick provider.
///
/// Scripts at or under the limit pass through unchanged. Longer scripts are
/// cut so that the result is exactly 512 characters and ends with `...`.
/// Lengths are counted in characters, not bytes, so multi-byte scripts are
/// never split mid-character.
pub fn truncate_for_quick(script: &str) -> ShapedScript {
    let char_count = script.chars().count();
    if char_count <= QUICK_SCRIPT_MAX_CHARS {
        return ShapedScript {
            script: script.to_string(),
            truncated: false,
        };
    }

    let keep = QUICK_SCRIPT_MAX_CHARS - TRUNCATION_MARKER.len();
    let mut cut: String = script.chars().take(keep).collect();
    cut.push_str(TRUNCATION_MARKER);
    ShapedScript {
        script: cut,
        truncated: true,
    }
}

// ---------------------------------------------------------------------------
// Pacing truncation (presenter path)
// ---------------------------------------------------------------------------

/// Approximate characters spoken per second by a presenter avatar.
pub const CHARS_PER_SECOND: usize = 15;

/// Hard ceiling on Instagram presenter scripts regardless of duration.
pub const INSTAGRAM_SCRIPT_CAP_CHARS: usize = 900;

/// Cut a script to what fits the requested duration at spoken pace.
///
/// The budget is `duration_secs * CHARS_PER_SECOND`; Instagram is further
/// capped at [`INSTAGRAM_SCRIPT_CAP_CHARS`]. Cut scripts end with the same
/// ellipsis marker as the quick path.
pub fn truncate_for_pacing(script: &str, platform: Platform, duration_secs: u32) -> ShapedScript {
    let budget = duration_secs as usize * CHARS_PER_SECOND;
    let budget = match platform {
        Platform::Youtube => budget,
        Platform::Instagram => budget.min(INSTAGRAM_SCRIPT_CAP_CHARS),
    };

    let char_count = script.chars().count();
    if char_count <= budget || budget <= TRUNCATION_MARKER.len() {
        return ShapedScript {
            script: script.to_string(),
            truncated: false,
        };
    }

    let keep = budget - TRUNCATION_MARKER.len();
    let mut cut: String = script.chars().take(keep).collect();
    cut.push_str(TRUNCATION_MARKER);
    ShapedScript {
        script: cut,
        truncated: true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Quick path --

    #[test]
    fn short_script_passes_through() {
        let shaped = truncate_for_quick("hello world");
        assert_eq!(shaped.script, "hello world");
        assert!(!shaped.truncated);
    }

    #[test]
    fn script_at_limit_passes_through() {
        let script = "a".repeat(QUICK_SCRIPT_MAX_CHARS);
        let shaped = truncate_for_quick(&script);
        assert_eq!(shaped.script.chars().count(), QUICK_SCRIPT_MAX_CHARS);
        assert!(!shaped.truncated);
    }

    #[test]
    fn long_script_cut_to_exactly_512_with_marker() {
        let script = "a".repeat(600);
        let shaped = truncate_for_quick(&script);
        assert_eq!(shaped.script.chars().count(), 512);
        assert!(shaped.script.ends_with("..."));
        assert!(shaped.truncated);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 600 three-byte characters; a byte-based cut would land mid-char.
        let script = "日".repeat(600);
        let shaped = truncate_for_quick(&script);
        assert_eq!(shaped.script.chars().count(), 512);
        assert!(shaped.script.ends_with("..."));
    }

    #[test]
    fn boundary_just_over_limit() {
        let script = "a".repeat(513);
        let shaped = truncate_for_quick(&script);
        assert_eq!(shaped.script.chars().count(), 512);
        assert!(shaped.truncated);
    }

    // -- Pacing path --

    #[test]
    fn pacing_keeps_script_within_budget() {
        let script = "a".repeat(2000);
        let shaped = truncate_for_pacing(&script, Platform::Youtube, 60);
        assert_eq!(shaped.script.chars().count(), 60 * CHARS_PER_SECOND);
        assert!(shaped.script.ends_with("..."));
    }

    #[test]
    fn pacing_passes_short_script() {
        let shaped = truncate_for_pacing("short", Platform::Youtube, 60);
        assert_eq!(shaped.script, "short");
        assert!(!shaped.truncated);
    }

    #[test]
    fn instagram_cap_applies() {
        let script = "a".repeat(2000);
        // 120s * 15 = 1800 would exceed the Instagram cap of 900.
        let shaped = truncate_for_pacing(&script, Platform::Instagram, 120);
        assert_eq!(shaped.script.chars().count(), INSTAGRAM_SCRIPT_CAP_CHARS);
    }

    #[test]
    fn zero_duration_does_not_panic() {
        let shaped = truncate_for_pacing("anything", Platform::Youtube, 0);
        assert_eq!(shaped.script, "anything");
        assert!(!shaped.truncated);
    }
}
