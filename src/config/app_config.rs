use rocket::data::ByteUnit;
use serde::{Deserialize, Serialize};

use std::path::PathBuf;

pub const DEFAULT_TODO_FILE: &str = "todos.json";
pub const DEFAULT_MAX_JSON_SIZE: ByteUnit = ByteUnit::Gibibyte(1);

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub todo_file: PathBuf,
    /// `"*"` allows every origin.
    pub cors_origins: Vec<String>,
    /// Request body limit for JSON payloads, replacing Rocket's `limits.json`.
    pub max_json_size: ByteUnit,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            todo_file: PathBuf::from(DEFAULT_TODO_FILE),
            cors_origins: vec!["*".to_string()],
            max_json_size: DEFAULT_MAX_JSON_SIZE,
        }
    }
}
