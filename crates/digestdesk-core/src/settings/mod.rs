//! Client-side settings: the credential and the last used generation inputs.

mod model;
mod repository;

pub use model::{
    CREDENTIAL_MASK, CredentialSource, CredentialStatus, DEFAULT_CATEGORIES, DEFAULT_INTERESTS,
    GenerationParams, Settings, parse_categories,
};
pub use repository::SettingsRepository;
