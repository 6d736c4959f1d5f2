//! Settings repository trait.

use async_trait::async_trait;

use super::model::Settings;
use crate::error::Result;

/// Persistence of client-side settings.
///
/// Implementations must never log the credential.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads settings. Returns defaults if nothing is stored yet.
    async fn load(&self) -> Result<Settings>;

    /// Replaces the stored settings.
    async fn save(&self, settings: &Settings) -> Result<()>;
}
