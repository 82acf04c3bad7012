use serde::{Deserialize, Serialize};
use crate::enums::output_format::OutputFormat;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "ConfigHelper::default_save_history")]
    pub save_history: bool,

    #[serde(default)]
    pub history_dir: Option<String>,

    #[serde(default = "ConfigHelper::default_owner")]
    pub owner: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            save_history: ConfigHelper::default_save_history(),
            history_dir: None,
            owner: ConfigHelper::default_owner(),
        }
    }
}
