use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    #[serde(default)]
    pub wizard: WizardConfig,
}

/// Wizard defaults the shell may override per deployment
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WizardConfig {
    /// Description submitted when the user leaves the field empty
    pub default_description: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_description: crate::wizard::submit::DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}
