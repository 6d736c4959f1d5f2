//! Settings models.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORIES: &str = "cs.AI, cs.CL, cs.LG";
pub const DEFAULT_INTERESTS: &str = "machine learning, AI agents";

/// Fixed placeholder shown instead of a stored credential.
pub const CREDENTIAL_MASK: &str = "••••••••";

/// Free-text inputs of the generation job, remembered between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_categories")]
    pub categories: String,
    #[serde(default = "default_interests")]
    pub interests: String,
}

fn default_categories() -> String {
    DEFAULT_CATEGORIES.to_string()
}

fn default_interests() -> String {
    DEFAULT_INTERESTS.to_string()
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            interests: default_interests(),
        }
    }
}

/// Everything persisted on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    #[serde(default)]
    pub generation: GenerationParams,
}

impl Settings {
    /// The stored credential, ignoring blank values.
    pub fn credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    pub fn credential_status(&self) -> CredentialStatus {
        CredentialStatus {
            source: self.has_credential().then_some(CredentialSource::Settings),
        }
    }
}

/// Where the credential in use comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    /// Stored in the settings file.
    Settings,
    /// Supplied by the environment of the process.
    Environment,
}

/// What may be shown about the credential. Never carries the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CredentialStatus {
    /// `None` when no credential is available at all.
    pub source: Option<CredentialSource>,
}

impl CredentialStatus {
    pub fn from_environment() -> Self {
        Self {
            source: Some(CredentialSource::Environment),
        }
    }

    pub fn configured(&self) -> bool {
        self.source.is_some()
    }

    /// Masked display value, `None` when no credential is available.
    pub fn masked(&self) -> Option<&'static str> {
        self.configured().then_some(CREDENTIAL_MASK)
    }
}

/// Splits a comma separated category list, dropping blanks.
pub fn parse_categories(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.has_credential());
        assert_eq!(settings.generation.categories, DEFAULT_CATEGORIES);
        assert_eq!(settings.generation.interests, DEFAULT_INTERESTS);
    }

    #[test]
    fn test_blank_credential_is_not_configured() {
        let settings = Settings {
            credential: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!settings.has_credential());
        assert!(!settings.credential_status().configured());
        assert_eq!(settings.credential_status().masked(), None);
    }

    #[test]
    fn test_credential_status_is_masked() {
        let settings = Settings {
            credential: Some("ghp_secret".to_string()),
            ..Default::default()
        };
        let status = settings.credential_status();
        assert_eq!(status.source, Some(CredentialSource::Settings));
        assert_eq!(status.masked(), Some(CREDENTIAL_MASK));
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!(parse_categories(" cs.AI, ,cs.CL "), vec!["cs.AI", "cs.CL"]);
        assert!(parse_categories(" , ").is_empty());
    }

    #[test]
    fn test_toml_round_trip_skips_missing_credential() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        assert!(!text.contains("credential"));
        let parsed: Settings = toml::from_str("").unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
