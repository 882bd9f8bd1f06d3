//! HTTP clients for every third-party service the platform talks to.
//!
//! The four video vendors implement the [`provider::VideoProvider`] trait
//! and share the internal [`JobHandle`]/[`JobStatus`] shapes from
//! `reelgen-core`; the remaining clients (text completion, image
//! generation, stock footage, channel search) are plain request/response
//! wrappers. All adapters are constructed once at startup from
//! [`config::ProviderSettings`] and share a single `reqwest::Client`.
//!
//! [`JobHandle`]: reelgen_core::types::JobHandle
//! [`JobStatus`]: reelgen_core::types::JobStatus

pub mod config;
pub mod edenai;
pub mod error;
pub mod heygen;
pub mod openai;
pub mod pexels;
pub mod provider;
pub mod registry;
pub mod runway;
pub mod synthesia;
pub mod youtube;

pub use config::{CredentialKey, ProviderSettings};
pub use error::ProviderError;
pub use provider::VideoProvider;
pub use registry::ProviderRegistry;
