//! Key removal for locale files, preserving the original formatting.

use jsonc_parser::ParseOptions;
use jsonc_parser::cst::CstRootNode;

/// Result of CST-based key deletion, preserving original formatting.
#[derive(Debug, Clone)]
pub struct KeyDeletionResult {
    pub new_text: String,
    pub deleted_keys: Vec<String>,
}

/// Delete top-level keys from a JSON object using CST to preserve formatting.
///
/// Keys are matched verbatim; a `.` inside a key is not a path separator.
/// Every other byte of the document, including the order and values of the
/// remaining entries, is kept. Returns `None` when the text is not a JSON object.
#[must_use]
pub fn delete_keys_from_json_text(
    json_text: &str,
    keys_to_delete: &[String],
) -> Option<KeyDeletionResult> {
    let root = CstRootNode::parse(json_text, &ParseOptions::default()).ok()?;
    let root_obj = root.object_value()?;

    let mut deleted_keys = Vec::new();

    for key in keys_to_delete {
        let mut removed = false;
        // A key may appear more than once in a hand-edited file
        while let Some(prop) = root_obj.get(key) {
            prop.remove();
            removed = true;
        }
        if removed {
            deleted_keys.push(key.clone());
        }
    }

    Some(KeyDeletionResult { new_text: root.to_string(), deleted_keys })
}
