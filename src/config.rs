use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub header: String,
    pub submit_text: String,
    pub first_name_min_len: usize,
    pub email_pattern: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            header: "Contact Form".to_string(),
            submit_text: "Submit".to_string(),
            first_name_min_len: 5,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&source)
    }
}
