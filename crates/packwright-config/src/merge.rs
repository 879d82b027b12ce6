//! Deep merge for configuration fragments.
//!
//! The semantics mirror the merge utility webpack setups conventionally use:
//!
//! - objects overlay recursively,
//! - arrays concatenate, earlier fragment's elements first,
//! - scalars and type-mismatched slots take the later value.
//!
//! `merge_all` is a **left fold** in fragment-list order. That order is part
//! of the contract: the operation is associative for shape-aligned values but
//! not across mixed-type sequences (see the property suite), so callers rely
//! on the fold direction, not on regrouping.

use serde_json::Value;

/// Merge `overlay` into `target` in place.
pub fn merge(target: &mut Value, overlay: &Value) {
    match (target, overlay) {
        (Value::Object(target_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                merge(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (Value::Array(target_items), Value::Array(overlay_items)) => {
            target_items.extend(overlay_items.iter().cloned());
        }
        (slot, value) => {
            *slot = value.clone();
        }
    }
}

/// Left-fold a sequence of fragments into one value.
///
/// Starts from an empty object, so an empty sequence yields `{}`.
pub fn merge_all<I>(fragments: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let mut merged = Value::Object(serde_json::Map::new());
    for fragment in fragments {
        merge(&mut merged, &fragment);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_take_the_later_value() {
        let mut target = json!({ "mode": "development", "devtool": "eval" });
        merge(&mut target, &json!({ "mode": "production" }));
        assert_eq!(target, json!({ "mode": "production", "devtool": "eval" }));
    }

    #[test]
    fn arrays_concatenate_in_order() {
        let mut target = json!({ "plugins": [{ "plugin": "a" }] });
        merge(&mut target, &json!({ "plugins": [{ "plugin": "b" }, { "plugin": "c" }] }));
        assert_eq!(
            target,
            json!({ "plugins": [{ "plugin": "a" }, { "plugin": "b" }, { "plugin": "c" }] })
        );
    }

    #[test]
    fn objects_overlay_recursively() {
        let mut target = json!({ "output": { "path": "/build", "filename": "[name].js" } });
        merge(&mut target, &json!({ "output": { "filename": "[name].[hash:20].js" } }));
        assert_eq!(
            target,
            json!({ "output": { "path": "/build", "filename": "[name].[hash:20].js" } })
        );
    }

    #[test]
    fn fresh_keys_are_inserted() {
        let mut target = json!({});
        merge(&mut target, &json!({ "entry": { "main": ["./main.ts"] } }));
        assert_eq!(target, json!({ "entry": { "main": ["./main.ts"] } }));
    }

    #[test]
    fn type_mismatch_takes_the_later_value() {
        let mut target = json!({ "devtool": ["eval"] });
        merge(&mut target, &json!({ "devtool": "source-map" }));
        assert_eq!(target, json!({ "devtool": "source-map" }));

        let mut target = json!({ "entry": "main.ts" });
        merge(&mut target, &json!({ "entry": { "main": ["./main.ts"] } }));
        assert_eq!(target, json!({ "entry": { "main": ["./main.ts"] } }));
    }

    #[test]
    fn merge_all_folds_left_in_fragment_order() {
        let merged = merge_all([
            json!({ "mode": "development", "plugins": [1] }),
            json!({ "mode": "production", "plugins": [2] }),
            json!({ "plugins": [3] }),
        ]);
        assert_eq!(merged, json!({ "mode": "production", "plugins": [1, 2, 3] }));
    }

    #[test]
    fn merge_all_of_nothing_is_an_empty_object() {
        assert_eq!(merge_all(Vec::<Value>::new()), json!({}));
    }
}
