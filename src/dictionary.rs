//! Reference and locale dictionaries (flat JSON objects).
/// Format-preserving key removal
pub mod edit;
/// Dictionary errors
pub mod error;
/// Locale dictionaries
pub mod locale;
/// Reference dictionary
pub mod reference;

pub use edit::{
    KeyDeletionResult,
    delete_keys_from_json_text,
};
pub use error::DictionaryError;
pub use locale::{
    LocaleDictionary,
    discover_locale_files,
};
pub use reference::ReferenceDictionary;
