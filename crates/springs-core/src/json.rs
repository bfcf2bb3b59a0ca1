//! Normalization of shorthand interpolation-config JSON.
//!
//! Authors write either the canonical object form
//! `{ "range": [0, 1], "output": [0, 100], "extrapolate": "clamp" }` or the
//! two-array shorthand `[[0, 1], [0, 100]]`. Both normalize into
//! [`RangeConfig`](crate::interp::RangeConfig).

use serde_json::{json, Value as JsonValue};
use thiserror::Error;

use crate::interp::RangeConfig;

/// Errors produced while normalizing interpolation config JSON blobs.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("range config parse error: {0}")]
    ConfigParse(String),
}

/// Parse a shorthand or canonical interpolation config.
pub fn parse_range_config_json(value: JsonValue) -> Result<RangeConfig, JsonError> {
    let normalized = match value {
        JsonValue::Array(arr) if arr.len() == 2 && arr.iter().all(JsonValue::is_array) => {
            log::debug!("normalizing two-array interpolation shorthand");
            json!({ "range": arr[0], "output": arr[1] })
        }
        other => other,
    };
    serde_json::from_value(normalized).map_err(|e| JsonError::ConfigParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::{Extrapolate, OutputValue};

    /// it should accept the two-array shorthand
    #[test]
    fn shorthand_arrays() {
        let cfg = parse_range_config_json(json!([[0, 0.5, 1], ["yellow", "orange", "red"]]))
            .expect("shorthand parses");
        assert_eq!(cfg.range, vec![0.0, 0.5, 1.0]);
        assert_eq!(cfg.output.len(), 3);
        assert_eq!(cfg.output[0], OutputValue::Text("yellow".into()));
        assert!(cfg.extrapolate.is_none());
    }

    /// it should accept the canonical object form with edge overrides
    #[test]
    fn canonical_object() {
        let cfg = parse_range_config_json(json!({
            "range": [0, 1],
            "output": [0, 100],
            "extrapolate": "clamp",
            "extrapolateRight": "extend"
        }))
        .expect("object parses");
        assert_eq!(cfg.extrapolate, Some(Extrapolate::Clamp));
        assert_eq!(cfg.extrapolate_right, Some(Extrapolate::Extend));
    }

    /// it should surface malformed configs as parse errors
    #[test]
    fn malformed_config_errors() {
        assert!(parse_range_config_json(json!({ "output": [0, 1] })).is_err());
        assert!(parse_range_config_json(json!(42)).is_err());
    }
}
