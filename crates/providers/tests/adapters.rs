//! Wire-level tests for the vendor adapters.
//!
//! Each test stands up a mock vendor server, points an adapter at it, and
//! asserts on the exact request the adapter sends or the mapped status it
//! returns. No real vendor is contacted.

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reelgen_core::types::{
    GenerationRequest, JobHandle, JobState, Platform, ProviderKind,
};
use reelgen_providers::edenai::EdenAiProvider;
use reelgen_providers::heygen::HeyGenProvider;
use reelgen_providers::runway::RunwayProvider;
use reelgen_providers::synthesia::SynthesiaProvider;
use reelgen_providers::{ProviderError, VideoProvider};

fn request(script: &str) -> GenerationRequest {
    GenerationRequest {
        title: "T".into(),
        script: script.into(),
        duration_secs: 30,
        platform: Platform::Youtube,
        avatar_selector: "professional_male".into(),
        background_image_url: None,
    }
}

// ---------------------------------------------------------------------------
// Test: quick path truncates scripts to exactly 512 chars on the wire
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quick_submit_truncates_script_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/video/text_to_video_async"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "public_id": "pub-1", "status": "pending"
        })))
        .mount(&server)
        .await;

    let provider =
        EdenAiProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let handle = provider.submit(&request(&"a".repeat(600))).await.unwrap();
    assert_eq!(handle.provider, ProviderKind::EdenAi);
    assert_eq!(handle.provider_job_id, "pub-1");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let sent = body["text"].as_str().unwrap();
    assert_eq!(sent.chars().count(), 512);
    assert!(sent.ends_with("..."));
}

// ---------------------------------------------------------------------------
// Test: quick poll finds the URL via the fallback field list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quick_poll_scans_fallback_url_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/video/text_to_video_async/pub-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "finished",
            "video_url": "https://cdn/legacy.mp4"
        })))
        .mount(&server)
        .await;

    let provider =
        EdenAiProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let handle = JobHandle::new(ProviderKind::EdenAi, "pub-1");
    let status = provider.poll_status(&handle).await.unwrap();
    assert_eq!(status.state, JobState::Completed);
    assert_eq!(status.video_url.as_deref(), Some("https://cdn/legacy.mp4"));
}

// ---------------------------------------------------------------------------
// Test: completed with no recognizable URL is completed-with-diagnostic
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quick_poll_without_url_is_completed_with_diagnostic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/video/text_to_video_async/pub-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "finished",
            "results": {"amazon": {"cost": 0.12}}
        })))
        .mount(&server)
        .await;

    let provider =
        EdenAiProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let handle = JobHandle::new(ProviderKind::EdenAi, "pub-2");
    let status = provider.poll_status(&handle).await.unwrap();
    assert_eq!(status.state, JobState::Completed);
    assert!(status.video_url.is_none());
    assert!(status.message.contains("no video URL"));
}

// ---------------------------------------------------------------------------
// Test: polling twice with unchanged upstream state maps identically
// ---------------------------------------------------------------------------

#[tokio::test]
async fn poll_status_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/video/text_to_video_async/pub-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "processing"
        })))
        .mount(&server)
        .await;

    let provider =
        EdenAiProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let handle = JobHandle::new(ProviderKind::EdenAi, "pub-3");
    let first = provider.poll_status(&handle).await.unwrap();
    let second = provider.poll_status(&handle).await.unwrap();
    assert_eq!(first.state, second.state);
    assert_eq!(first.video_url, second.video_url);
    assert_eq!(first.message, second.message);
}

// ---------------------------------------------------------------------------
// Test: unknown avatar selector submits the default persona, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn avatar_submit_falls_back_to_default_persona() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/video/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"video_id": "vid-1"}
        })))
        .mount(&server)
        .await;

    let provider =
        HeyGenProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let mut req = request("hello");
    req.avatar_selector = "unknown_value".into();
    provider.submit(&req).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let (default_avatar, default_voice) = HeyGenProvider::lookup_avatar("unknown_value");
    assert_eq!(
        body["video_inputs"][0]["character"]["avatar_id"],
        default_avatar
    );
    assert_eq!(body["video_inputs"][0]["voice"]["voice_id"], default_voice);
}

// ---------------------------------------------------------------------------
// Test: avatar status 404 means moderation rejection, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn avatar_poll_404_maps_to_moderation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/video_status.get"))
        .and(query_param("video_id", "vid-404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider =
        HeyGenProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let handle = JobHandle::new(ProviderKind::HeyGen, "vid-404");
    let status = provider.poll_status(&handle).await.unwrap();
    assert_eq!(status.state, JobState::Failed);
    assert!(status.message.contains("moderation"));
}

// ---------------------------------------------------------------------------
// Test: presenter submit sends a filtered, paced script
// ---------------------------------------------------------------------------

#[tokio::test]
async fn presenter_submit_filters_script_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "syn-1", "status": "queued"
        })))
        .mount(&server)
        .await;

    let provider =
        SynthesiaProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    provider
        .submit(&request("You should invest for guaranteed profit"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let sent = body["input"][0]["scriptText"].as_str().unwrap().to_lowercase();
    assert!(!sent.contains("invest"));
    assert!(!sent.contains("guaranteed"));
    assert!(!sent.contains("profit"));
}

// ---------------------------------------------------------------------------
// Test: extendable task SUCCEEDED maps to completed with the output URL
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extendable_poll_maps_succeeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tasks/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCEEDED",
            "output": ["https://cdn/base.mp4"]
        })))
        .mount(&server)
        .await;

    let provider =
        RunwayProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let handle = JobHandle::new(ProviderKind::Runway, "task-1");
    let status = provider.poll_status(&handle).await.unwrap();
    assert_eq!(status.state, JobState::Completed);
    assert_eq!(status.video_url.as_deref(), Some("https://cdn/base.mp4"));
}

// ---------------------------------------------------------------------------
// Test: extend uses the prior stage's id and a stage-specific prompt
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extend_submits_asset_id_and_continuation_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/video_extend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "task-2", "status": "PENDING"
        })))
        .mount(&server)
        .await;

    let provider =
        RunwayProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let submission = provider.extend("task-1", 2, "Mars rovers").await.unwrap();
    assert_eq!(submission.stage, 2);
    assert_eq!(submission.handle.provider_job_id, "task-2");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["assetId"], "task-1");
    let prompt = body["promptText"].as_str().unwrap();
    assert!(prompt.contains("Mars rovers"));
}

// ---------------------------------------------------------------------------
// Test: extend rejects stages outside [2, 4] without a network call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extend_rejects_out_of_range_stage_locally() {
    let server = MockServer::start().await;

    let provider =
        RunwayProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    assert_matches!(
        provider.extend("task-1", 5, "T").await,
        Err(ProviderError::Invalid(_))
    );
    assert_matches!(
        provider.extend("task-1", 1, "T").await,
        Err(ProviderError::Invalid(_))
    );

    assert!(server.received_requests().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: vendor non-2xx becomes an Api error carrying the raw body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn vendor_error_body_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text_to_video"))
        .respond_with(ResponseTemplate::new(402).set_body_string("credit exhausted"))
        .mount(&server)
        .await;

    let provider =
        RunwayProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);
    let err = provider.submit(&request("hello")).await.unwrap_err();
    assert_matches!(
        err,
        ProviderError::Api { status: 402, ref body } if body == "credit exhausted"
    );
}

// ---------------------------------------------------------------------------
// Test: empty required fields fail before any network call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_validates_before_network() {
    let server = MockServer::start().await;
    let provider =
        RunwayProvider::with_client(reqwest::Client::new(), "key".into(), server.uri(), true);

    let mut req = request("hello");
    req.title = "".into();
    assert_matches!(
        provider.submit(&req).await,
        Err(ProviderError::Invalid(_))
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}
