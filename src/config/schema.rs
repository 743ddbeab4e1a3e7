use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "catalog": {
                "type": "object",
                "required": ["path"],
                "properties": {
                    "path": { "type": "string" }
                }
            },
            "pricing": {
                "type": "object",
                "properties": {
                    "emergency_surcharge": { "type": "integer", "minimum": 0 }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "api_token": { "type": "string" }
                }
            },
            "ids": {
                "type": "object",
                "properties": {
                    "strategy": { "type": "string", "enum": ["uuid", "timestamp"] }
                }
            }
        }
    })
});
