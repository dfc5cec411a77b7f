//! Response schemas sent with every structured call.
//!
//! Written in the generative API's OpenAPI subset (`OBJECT`, `ARRAY`, `STRING`).

use serde_json::{json, Value};

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

fn theme_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "primary": { "type": "STRING" },
            "secondary": { "type": "STRING" },
            "background": { "type": "STRING" },
            "text": { "type": "STRING" }
        },
        "required": ["primary", "secondary", "background", "text"]
    })
}

/// Schema for a full chapter draft. `dateRange` is requested but optional.
pub fn story_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "emoji": { "type": "STRING" },
            "dateRange": { "type": "STRING" },
            "tags": string_array(),
            "skills": string_array(),
            "tools": string_array(),
            "duties": string_array(),
            "theme": theme_schema()
        },
        "required": ["title", "description", "emoji", "tags", "skills", "tools", "duties", "theme"]
    })
}

/// Schema for regenerated chapter metadata.
pub fn metadata_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "emoji": { "type": "STRING" },
            "tags": string_array(),
            "skills": string_array(),
            "tools": string_array(),
            "duties": string_array(),
            "theme": theme_schema()
        },
        "required": ["emoji", "tags", "skills", "tools", "duties", "theme"]
    })
}
