//! Local persistence and configuration for digestdesk.

pub mod config_service;
pub mod digest_index;
pub mod file_digest_source;
pub mod paths;
pub mod repo_info;
pub mod settings_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::digest_index::{build_digest_index, write_digest_index};
pub use crate::file_digest_source::FileDigestSource;
pub use crate::paths::DeskPaths;
pub use crate::settings_repository::FileSettingsRepository;
