use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "data": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "root": { "type": "string", "minLength": 1 },
                    "extension": { "type": "string", "minLength": 1 },
                    "on_error": { "type": "string", "enum": ["abort", "skip"] }
                }
            },
            "llm": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "provider": { "type": "string" },
                    "model": { "type": "string" },
                    "api_key": { "type": "string" },
                    "base_url": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                }
            }
        }
    })
});
