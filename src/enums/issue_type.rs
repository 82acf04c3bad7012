use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum IssueType {
    Error,
    Warning,
    Performance,
    Info,
}

impl Default for IssueType {
    fn default() -> Self {
        IssueType::Info
    }
}

impl IssueType {
    pub const ALL: [&'static str; 4] = ["Error", "Warning", "Performance", "Info"];

    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => Some(IssueType::Error),
            "warning" | "warn" => Some(IssueType::Warning),
            "performance" => Some(IssueType::Performance),
            "info" | "informational" => Some(IssueType::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Error => "Error",
            IssueType::Warning => "Warning",
            IssueType::Performance => "Performance",
            IssueType::Info => "Info",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            IssueType::Error => "❌",
            IssueType::Warning => "⚠️",
            IssueType::Performance => "⚡",
            IssueType::Info => "ℹ️",
        }
    }
}
