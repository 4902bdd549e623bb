//! `src/store/record.rs`
//! ============================================================================
//! # ModelRecord: Normalized Catalog Entry
//!
//! One row of the model catalog after normalization. Every field is a defined
//! string once a record exists: absent classification fields become
//! `"Unknown"`, absent paths become `""`, and trigger-phrase payloads that
//! fail to parse degrade to an empty sequence rather than an error.

use std::path::Path;

use serde_json::Value;
use smallvec::SmallVec;

/// Sentinel used for absent name/type/base fields.
pub const UNKNOWN: &str = "Unknown";

/// Normalized in-memory representation of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRecord {
    /// Human-readable name, base name plus file extension. Never empty.
    pub display_name: String,

    /// Category label (e.g. "lora", "main"). `"Unknown"` when absent.
    pub model_type: String,

    /// Secondary classification (base family). `"Unknown"` when absent.
    pub model_subtype: String,

    /// Zero or more short trigger strings. Most records carry none.
    pub trigger_phrases: SmallVec<[String; 4]>,

    /// Relative path of the underlying file. `""` when absent.
    pub storage_path: String,
}

impl ModelRecord {
    /// Build a record from the raw nullable columns a store row yields.
    #[must_use]
    pub fn from_raw(
        name: Option<String>,
        model_type: Option<String>,
        model_subtype: Option<String>,
        trigger_payload: Option<String>,
        storage_path: Option<String>,
    ) -> Self {
        let storage_path: String = storage_path.unwrap_or_default();

        Self {
            display_name: derive_display_name(name.as_deref(), &storage_path),
            model_type: model_type.unwrap_or_else(|| UNKNOWN.to_string()),
            model_subtype: model_subtype.unwrap_or_else(|| UNKNOWN.to_string()),
            trigger_phrases: parse_trigger_phrases(trigger_payload.as_deref()),
            storage_path,
        }
    }

    /// Comma-joined trigger phrases for tabular display.
    #[must_use]
    pub fn triggers_joined(&self) -> String {
        self.trigger_phrases.join(", ")
    }

    /// True when the record has no usable on-disk path.
    #[must_use]
    pub fn has_blank_path(&self) -> bool {
        self.storage_path.trim().is_empty()
    }
}

/// Base name (or `"Unknown"`) plus the extension of the storage path, if any.
fn derive_display_name(name: Option<&str>, storage_path: &str) -> String {
    let base: &str = match name {
        Some(n) if !n.is_empty() => n,
        _ => UNKNOWN,
    };

    match Path::new(storage_path).extension().and_then(|e| e.to_str()) {
        Some(ext) if !storage_path.is_empty() => format!("{base}.{ext}"),
        _ => base.to_string(),
    }
}

/// Defensive trigger-phrase parsing.
///
/// A JSON list of strings is used as-is; any other valid JSON value is
/// coerced to a single-element sequence of its string form; unparseable or
/// absent payloads yield an empty sequence. Row-level parse failures never
/// propagate to the caller.
fn parse_trigger_phrases(payload: Option<&str>) -> SmallVec<[String; 4]> {
    let Some(payload) = payload else {
        return SmallVec::new();
    };

    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(items)) => items.into_iter().map(value_to_string).collect(),
        Ok(Value::Null) => SmallVec::new(),
        Ok(other) => {
            let mut one: SmallVec<[String; 4]> = SmallVec::new();
            one.push(value_to_string(other));
            one
        }
        Err(_) => SmallVec::new(),
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_appends_extension_from_path() {
        let rec = ModelRecord::from_raw(
            Some("foo".into()),
            Some("lora".into()),
            Some("sdxl".into()),
            None,
            Some("u1/foo.safetensors".into()),
        );
        assert_eq!(rec.display_name, "foo.safetensors");
    }

    #[test]
    fn display_name_without_path_or_extension() {
        let rec = ModelRecord::from_raw(Some("bar".into()), None, None, None, None);
        assert_eq!(rec.display_name, "bar");

        let rec = ModelRecord::from_raw(Some("baz".into()), None, None, None, Some("dir/baz".into()));
        assert_eq!(rec.display_name, "baz");
    }

    #[test]
    fn absent_fields_are_normalized() {
        let rec = ModelRecord::from_raw(None, None, None, None, None);
        assert_eq!(rec.display_name, UNKNOWN);
        assert_eq!(rec.model_type, UNKNOWN);
        assert_eq!(rec.model_subtype, UNKNOWN);
        assert_eq!(rec.storage_path, "");
        assert!(rec.trigger_phrases.is_empty());
        assert!(rec.has_blank_path());
    }

    #[test]
    fn trigger_list_payload_is_used_as_is() {
        let phrases = parse_trigger_phrases(Some("[\"a\",\"b\"]"));
        assert_eq!(phrases.as_slice(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn trigger_scalar_payload_is_coerced_to_single_element() {
        let phrases = parse_trigger_phrases(Some("\"zavy\""));
        assert_eq!(phrases.as_slice(), ["zavy".to_string()]);

        let phrases = parse_trigger_phrases(Some("42"));
        assert_eq!(phrases.as_slice(), ["42".to_string()]);
    }

    #[test]
    fn trigger_garbage_and_null_payloads_degrade_to_empty() {
        assert!(parse_trigger_phrases(Some("not json")).is_empty());
        assert!(parse_trigger_phrases(Some("null")).is_empty());
        assert!(parse_trigger_phrases(None).is_empty());
    }

    #[test]
    fn triggers_join_with_comma_space() {
        let rec = ModelRecord::from_raw(
            Some("foo".into()),
            None,
            None,
            Some("[\"a\",\"b\"]".into()),
            None,
        );
        assert_eq!(rec.triggers_joined(), "a, b");
    }
}
