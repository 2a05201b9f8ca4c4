//! Recursive merge of a stored (possibly partial) JSON record over the
//! default record.
//!
//! Top-level keys from the overlay replace the base; nested objects merge
//! key-by-key so a stale record that only carries part of a nested block
//! (for example one preference field) keeps defaults for the rest.

use serde_json::Value;

/// Merge `overlay` into `base` in place. Object values merge recursively;
/// every other value (including arrays and nulls) replaces wholesale.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overlay_replaces_scalar_fields() {
        let mut base = json!({"route": "home", "count": 1});
        deep_merge(&mut base, json!({"route": "calm"}));
        assert_eq!(base, json!({"route": "calm", "count": 1}));
    }

    #[test]
    fn absent_fields_keep_base_defaults() {
        let mut base = json!({"route": "home", "last_visited": null});
        deep_merge(&mut base, json!({}));
        assert_eq!(base, json!({"route": "home", "last_visited": null}));
    }

    #[test]
    fn nested_objects_merge_field_by_field() {
        let mut base = json!({
            "preferences": {"preferred_mode": "balanced", "last_plan_choice": null}
        });
        deep_merge(&mut base, json!({"preferences": {"preferred_mode": "movement"}}));
        assert_eq!(
            base,
            json!({
                "preferences": {"preferred_mode": "movement", "last_plan_choice": null}
            })
        );
    }

    #[test]
    fn unknown_overlay_fields_are_kept() {
        let mut base = json!({"route": "home"});
        deep_merge(&mut base, json!({"extra": {"nested": true}}));
        assert_eq!(base, json!({"route": "home", "extra": {"nested": true}}));
    }

    #[test]
    fn explicit_null_replaces_base_value() {
        let mut base = json!({"last_stop": {"route": "calm"}});
        deep_merge(&mut base, json!({"last_stop": null}));
        assert_eq!(base, json!({"last_stop": null}));
    }

    #[test]
    fn non_object_overlay_replaces_object_base() {
        let mut base = json!({"preferences": {"preferred_mode": "balanced"}});
        deep_merge(&mut base, json!({"preferences": "oops"}));
        assert_eq!(base, json!({"preferences": "oops"}));
    }

    #[test]
    fn arrays_replace_rather_than_concatenate() {
        let mut base = json!({"items": [1, 2, 3]});
        deep_merge(&mut base, json!({"items": [9]}));
        assert_eq!(base, json!({"items": [9]}));
    }
}
