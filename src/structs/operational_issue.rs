use serde::{Deserialize, Serialize};
use crate::enums::issue_type::IssueType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationalIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub recommendation: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}
