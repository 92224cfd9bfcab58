//! Configuration for the release tools.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Source and locale file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    CONFIG_FILE_NAME,
    ConfigError,
    I18nSettings,
    ReleaseSettings,
    ToolSettings,
    ValidationError,
};
