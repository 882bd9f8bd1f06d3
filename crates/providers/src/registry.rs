//! Startup assembly of all provider adapters.
//!
//! [`ProviderRegistry::from_settings`] constructs an adapter for every
//! provider whose credential is configured, sharing one `reqwest::Client`
//! across all of them for connection pooling. Calling an unconfigured
//! provider yields [`ProviderError::MissingCredential`] naming the missing
//! environment variable, so a half-configured deployment fails loudly and
//! specifically.

use std::time::Duration;

use crate::config::{CredentialKey, ProviderSettings};
use crate::edenai::EdenAiProvider;
use crate::error::ProviderError;
use crate::heygen::HeyGenProvider;
use crate::openai::OpenAiClient;
use crate::pexels::PexelsClient;
use crate::runway::RunwayProvider;
use crate::synthesia::SynthesiaProvider;
use crate::youtube::YouTubeClient;

/// HTTP request timeout for a single vendor call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Connection timeout for vendor calls.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// All provider adapters, built once at startup.
pub struct ProviderRegistry {
    quick: Option<EdenAiProvider>,
    avatar: Option<HeyGenProvider>,
    presenter: Option<SynthesiaProvider>,
    extendable: Option<RunwayProvider>,
    content: Option<OpenAiClient>,
    footage: Option<PexelsClient>,
    channels: Option<YouTubeClient>,
    configured: usize,
}

impl ProviderRegistry {
    /// Build adapters for every configured provider.
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");

        let key = |k: CredentialKey| settings.credential(k).map(String::from);
        let legacy = settings.legacy_url_fallback;

        let quick = key(CredentialKey::EdenAi).map(|api_key| {
            EdenAiProvider::with_client(
                client.clone(),
                api_key,
                settings.edenai_base_url.clone(),
                legacy,
            )
        });
        let avatar = key(CredentialKey::HeyGen).map(|api_key| {
            HeyGenProvider::with_client(
                client.clone(),
                api_key,
                settings.heygen_base_url.clone(),
                legacy,
            )
        });
        let presenter = key(CredentialKey::Synthesia).map(|api_key| {
            SynthesiaProvider::with_client(
                client.clone(),
                api_key,
                settings.synthesia_base_url.clone(),
                legacy,
            )
        });
        let extendable = key(CredentialKey::Runway).map(|api_key| {
            RunwayProvider::with_client(
                client.clone(),
                api_key,
                settings.runway_base_url.clone(),
                legacy,
            )
        });
        let content = key(CredentialKey::OpenAi).map(|api_key| {
            OpenAiClient::with_client(client.clone(), api_key, settings.openai_base_url.clone())
        });
        let footage = key(CredentialKey::Pexels).map(|api_key| {
            PexelsClient::with_client(client.clone(), api_key, settings.pexels_base_url.clone())
        });
        let channels = key(CredentialKey::YouTube).map(|api_key| {
            YouTubeClient::with_client(client.clone(), api_key, settings.youtube_base_url.clone())
        });

        let configured = settings.configured_count();
        for missing in settings.missing_keys() {
            tracing::warn!(env_var = missing, "Provider credential not configured");
        }

        Self {
            quick,
            avatar,
            presenter,
            extendable,
            content,
            footage,
            channels,
            configured,
        }
    }

    /// Number of providers with a configured credential.
    pub fn configured_count(&self) -> usize {
        self.configured
    }

    pub fn quick(&self) -> Result<&EdenAiProvider, ProviderError> {
        self.quick
            .as_ref()
            .ok_or(ProviderError::MissingCredential(
                CredentialKey::EdenAi.env_var(),
            ))
    }

    pub fn avatar(&self) -> Result<&HeyGenProvider, ProviderError> {
        self.avatar
            .as_ref()
            .ok_or(ProviderError::MissingCredential(
                CredentialKey::HeyGen.env_var(),
            ))
    }

    pub fn presenter(&self) -> Result<&SynthesiaProvider, ProviderError> {
        self.presenter
            .as_ref()
            .ok_or(ProviderError::MissingCredential(
                CredentialKey::Synthesia.env_var(),
            ))
    }

    pub fn extendable(&self) -> Result<&RunwayProvider, ProviderError> {
        self.extendable
            .as_ref()
            .ok_or(ProviderError::MissingCredential(
                CredentialKey::Runway.env_var(),
            ))
    }

    pub fn content(&self) -> Result<&OpenAiClient, ProviderError> {
        self.content
            .as_ref()
            .ok_or(ProviderError::MissingCredential(
                CredentialKey::OpenAi.env_var(),
            ))
    }

    pub fn footage(&self) -> Result<&PexelsClient, ProviderError> {
        self.footage
            .as_ref()
            .ok_or(ProviderError::MissingCredential(
                CredentialKey::Pexels.env_var(),
            ))
    }

    pub fn channels(&self) -> Result<&YouTubeClient, ProviderError> {
        self.channels
            .as_ref()
            .ok_or(ProviderError::MissingCredential(
                CredentialKey::YouTube.env_var(),
            ))
    }
}
