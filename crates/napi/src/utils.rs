//! Shared helper utilities.

use serde_json::Value as JsonValue;
use std::time::Instant;

pub(crate) fn empty_frontmatter() -> JsonValue {
    JsonValue::Object(Default::default())
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
