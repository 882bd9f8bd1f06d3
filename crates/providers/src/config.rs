//! Provider credentials and endpoint configuration.
//!
//! All vendor credentials are read from the environment exactly once, at
//! startup, and injected into the adapters via [`ProviderSettings`]. The
//! adapters themselves never touch the environment, which keeps them
//! constructible against mock servers in tests.

use std::collections::HashMap;

/// Typed enumeration of every credential the platform can use.
///
/// One named environment variable per provider; `from_env` resolves all of
/// them in a single pass so a missing key is visible at startup, not on the
/// first request that happens to need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    OpenAi,
    EdenAi,
    HeyGen,
    Synthesia,
    Runway,
    Pexels,
    YouTube,
}

impl CredentialKey {
    /// All known credential keys.
    pub const ALL: &'static [CredentialKey] = &[
        CredentialKey::OpenAi,
        CredentialKey::EdenAi,
        CredentialKey::HeyGen,
        CredentialKey::Synthesia,
        CredentialKey::Runway,
        CredentialKey::Pexels,
        CredentialKey::YouTube,
    ];

    /// The environment variable holding this credential.
    pub const fn env_var(&self) -> &'static str {
        match self {
            CredentialKey::OpenAi => "OPENAI_API_KEY",
            CredentialKey::EdenAi => "EDENAI_API_KEY",
            CredentialKey::HeyGen => "HEYGEN_API_KEY",
            CredentialKey::Synthesia => "SYNTHESIA_API_KEY",
            CredentialKey::Runway => "RUNWAY_API_KEY",
            CredentialKey::Pexels => "PEXELS_API_KEY",
            CredentialKey::YouTube => "YOUTUBE_API_KEY",
        }
    }
}

/// Resolved provider configuration, assembled once at startup.
///
/// Base URLs default to each vendor's production endpoint and can be
/// overridden via `<PROVIDER>_BASE_URL` environment variables (integration
/// tests point them at a mock server).
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    credentials: HashMap<CredentialKey, String>,
    /// Scan deprecated vendor response fields for the video URL when the
    /// documented primary field is absent.
    pub legacy_url_fallback: bool,
    pub openai_base_url: String,
    pub edenai_base_url: String,
    pub heygen_base_url: String,
    pub synthesia_base_url: String,
    pub runway_base_url: String,
    pub pexels_base_url: String,
    pub youtube_base_url: String,
}

impl ProviderSettings {
    /// Load all provider configuration from environment variables.
    ///
    /// | Env Var                   | Default                            |
    /// |---------------------------|------------------------------------|
    /// | `<PROVIDER>_API_KEY`      | unset (provider disabled)          |
    /// | `LEGACY_URL_FALLBACK`     | `true`                             |
    /// | `OPENAI_BASE_URL`         | `https://api.openai.com`           |
    /// | `EDENAI_BASE_URL`         | `https://api.edenai.run`           |
    /// | `HEYGEN_BASE_URL`         | `https://api.heygen.com`           |
    /// | `SYNTHESIA_BASE_URL`      | `https://api.synthesia.io`         |
    /// | `RUNWAY_BASE_URL`         | `https://api.dev.runwayml.com`     |
    /// | `PEXELS_BASE_URL`         | `https://api.pexels.com`           |
    /// | `YOUTUBE_BASE_URL`        | `https://www.googleapis.com`       |
    pub fn from_env() -> Self {
        let mut credentials = HashMap::new();
        for key in CredentialKey::ALL {
            if let Ok(value) = std::env::var(key.env_var()) {
                if !value.trim().is_empty() {
                    credentials.insert(*key, value);
                }
            }
        }

        let legacy_url_fallback = std::env::var("LEGACY_URL_FALLBACK")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Self {
            credentials,
            legacy_url_fallback,
            openai_base_url: base_url_from_env("OPENAI_BASE_URL", "https://api.openai.com"),
            edenai_base_url: base_url_from_env("EDENAI_BASE_URL", "https://api.edenai.run"),
            heygen_base_url: base_url_from_env("HEYGEN_BASE_URL", "https://api.heygen.com"),
            synthesia_base_url: base_url_from_env("SYNTHESIA_BASE_URL", "https://api.synthesia.io"),
            runway_base_url: base_url_from_env("RUNWAY_BASE_URL", "https://api.dev.runwayml.com"),
            pexels_base_url: base_url_from_env("PEXELS_BASE_URL", "https://api.pexels.com"),
            youtube_base_url: base_url_from_env("YOUTUBE_BASE_URL", "https://www.googleapis.com"),
        }
    }

    /// Empty settings with production base URLs; used as a test fixture
    /// base via the builder-style setters.
    pub fn empty() -> Self {
        Self {
            credentials: HashMap::new(),
            legacy_url_fallback: true,
            openai_base_url: "https://api.openai.com".into(),
            edenai_base_url: "https://api.edenai.run".into(),
            heygen_base_url: "https://api.heygen.com".into(),
            synthesia_base_url: "https://api.synthesia.io".into(),
            runway_base_url: "https://api.dev.runwayml.com".into(),
            pexels_base_url: "https://api.pexels.com".into(),
            youtube_base_url: "https://www.googleapis.com".into(),
        }
    }

    /// Set a credential explicitly (tests and embedders).
    pub fn with_credential(mut self, key: CredentialKey, value: impl Into<String>) -> Self {
        self.credentials.insert(key, value.into());
        self
    }

    /// The resolved credential for `key`, if configured.
    pub fn credential(&self, key: CredentialKey) -> Option<&str> {
        self.credentials.get(&key).map(String::as_str)
    }

    /// Env var names of all credentials that were not configured.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        CredentialKey::ALL
            .iter()
            .filter(|key| !self.credentials.contains_key(key))
            .map(|key| key.env_var())
            .collect()
    }

    /// Number of configured credentials.
    pub fn configured_count(&self) -> usize {
        self.credentials.len()
    }
}

fn base_url_from_env(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
