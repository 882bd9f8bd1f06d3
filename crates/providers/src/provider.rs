//! The polymorphic video-provider seam.
//!
//! Every video vendor adapter implements [`VideoProvider`], so the API
//! handlers submit and poll through one interface and select an adapter by
//! [`ProviderKind`] tag instead of by call site.

use async_trait::async_trait;
use reelgen_core::types::{GenerationRequest, JobHandle, JobStatus, ProviderKind};

use crate::error::ProviderError;

/// A third-party video generation vendor.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Which vendor this adapter talks to.
    fn kind(&self) -> ProviderKind;

    /// Submit a generation job.
    ///
    /// Validates required fields locally before any network call, shapes
    /// the request into the vendor's schema, and maps a 2xx response to a
    /// [`JobHandle`]. A non-2xx response becomes [`ProviderError::Api`]
    /// carrying the vendor's raw error body.
    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError>;

    /// Fetch the current status of a previously submitted job.
    ///
    /// One request/response pair; the vendor's status vocabulary is
    /// collapsed to the internal four-state [`JobState`]. Mutates nothing,
    /// so repeated polls against unchanged upstream state return the same
    /// snapshot.
    ///
    /// [`JobState`]: reelgen_core::types::JobState
    async fn poll_status(&self, handle: &JobHandle) -> Result<JobStatus, ProviderError>;
}

// ---------------------------------------------------------------------------
// Video URL extraction
// ---------------------------------------------------------------------------

/// Extract a playable video URL from a vendor status payload.
///
/// The documented `primary` field is always checked first. The deprecated
/// `legacy` field list is scanned in order only when `allow_legacy` is set
/// (vendors have been observed to move the URL between releases). Returns
/// `None` when no field matches; callers treat that as completed-without-URL
/// rather than an error.
///
/// Fields are dot-separated paths into the JSON payload; numeric segments
/// index into arrays, and a path landing on an array yields its first
/// string element.
pub fn extract_video_url(
    payload: &serde_json::Value,
    primary: &str,
    legacy: &[&str],
    allow_legacy: bool,
) -> Option<String> {
    if let Some(url) = lookup_url_path(payload, primary) {
        return Some(url);
    }
    if allow_legacy {
        for path in legacy {
            if let Some(url) = lookup_url_path(payload, path) {
                tracing::debug!(field = %path, "Video URL found via deprecated fallback field");
                return Some(url);
            }
        }
    }
    None
}

/// Resolve a dot-separated path to a URL string, if present and non-empty.
fn lookup_url_path(payload: &serde_json::Value, path: &str) -> Option<String> {
    let mut current = payload;
    for segment in path.split('.') {
        current = match segment.parse::<usize>() {
            Ok(index) => current.get(index)?,
            Err(_) => current.get(segment)?,
        };
    }
    let url = match current {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().find_map(|v| {
            v.as_str().map(String::from)
        })?,
        _ => return None,
    };
    if url.trim().is_empty() {
        None
    } else {
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_field_wins() {
        let payload = json!({"download": "https://a/v.mp4", "downloadUrl": "https://b/v.mp4"});
        let url = extract_video_url(&payload, "download", &["downloadUrl"], true);
        assert_eq!(url.as_deref(), Some("https://a/v.mp4"));
    }

    #[test]
    fn legacy_fields_scanned_in_order() {
        let payload = json!({"downloadUrl": "https://b/v.mp4"});
        let url = extract_video_url(&payload, "download", &["download_url", "downloadUrl"], true);
        assert_eq!(url.as_deref(), Some("https://b/v.mp4"));
    }

    #[test]
    fn legacy_disabled_means_primary_only() {
        let payload = json!({"downloadUrl": "https://b/v.mp4"});
        let url = extract_video_url(&payload, "download", &["downloadUrl"], false);
        assert_eq!(url, None);
    }

    #[test]
    fn nested_paths_resolve() {
        let payload = json!({"data": {"video_url": "https://c/v.mp4"}});
        let url = extract_video_url(&payload, "data.video_url", &[], true);
        assert_eq!(url.as_deref(), Some("https://c/v.mp4"));
    }

    #[test]
    fn array_paths_take_first_string() {
        let payload = json!({"output": ["https://d/v.mp4", "https://d/v2.mp4"]});
        let url = extract_video_url(&payload, "output", &[], true);
        assert_eq!(url.as_deref(), Some("https://d/v.mp4"));
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let payload = json!({"artifacts": [{"url": "https://e/v.mp4"}]});
        let url = extract_video_url(&payload, "artifacts.0.url", &[], true);
        assert_eq!(url.as_deref(), Some("https://e/v.mp4"));
    }

    #[test]
    fn empty_string_is_no_url() {
        let payload = json!({"download": "  "});
        assert_eq!(extract_video_url(&payload, "download", &[], true), None);
    }

    #[test]
    fn no_match_returns_none() {
        let payload = json!({"status": "complete"});
        assert_eq!(
            extract_video_url(&payload, "download", &["downloadUrl"], true),
            None
        );
    }
}
