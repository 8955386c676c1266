//! Feature schema resolution
//!
//! Determines the ordered list of feature names a loaded model was trained
//! on by probing the artifact's metadata. Several naming conventions are
//! tried in priority order; when only a feature count is available,
//! positional names are synthesized. Absence of any usable metadata is
//! signaled by an empty list, never by an error.

use serde_json::{Map, Value};

/// Metadata keys that may carry the trained feature names, in priority order.
const NAME_KEYS: [&str; 3] = ["feature_names_in", "feature_name_", "feature_name"];

/// Metadata key that may carry the trained feature count.
const COUNT_KEY: &str = "n_features";

/// Resolve the ordered feature names the model expects.
///
/// Returns an empty list when the metadata exposes neither names nor a
/// count. Callers must treat an empty result as a hard failure of the
/// inference path.
pub fn expected_feature_names(metadata: &Map<String, Value>) -> Vec<String> {
    for key in NAME_KEYS {
        if let Some(value) = metadata.get(key) {
            if let Some(names) = as_string_list(value) {
                return names;
            }
        }
    }

    if let Some(n) = metadata.get(COUNT_KEY).and_then(Value::as_u64) {
        return (0..n).map(|i| format!("f{}", i)).collect();
    }

    Vec::new()
}

fn as_string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
