use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub yaml_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            yaml_file: "corisa-app.yaml".into(),
            host: "0.0.0.0".into(),
            port: 5000,
        }
    }
}
