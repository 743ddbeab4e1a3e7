use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CATALOG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["issues"],
        "properties": {
            "issues": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["type", "label", "questions", "estimated_cost", "estimated_time"],
                    "properties": {
                        "type": {
                            "type": "string",
                            "enum": ["flat_tire", "brake_issue", "chain_problem", "gear_issue", "other"]
                        },
                        "label": { "type": "string", "minLength": 1 },
                        "questions": { "type": "array", "items": { "type": "string" } },
                        "estimated_cost": { "type": "integer", "minimum": 0 },
                        "estimated_time": { "type": "integer", "minimum": 0 }
                    }
                }
            }
        }
    })
});
