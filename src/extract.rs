//! Translatable string extraction from a source tree.
/// Marker rule applied to source text
pub mod rule;
/// Source tree walker
pub mod scanner;
/// Extraction results and errors
pub mod types;

pub use rule::MarkerRule;
pub use scanner::extract_keys;
pub use types::{
    ExtractError,
    Extraction,
    SkippedFile,
};
