use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the REST submissions listing
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Submission {
    pub id: u64,
    pub question_id: u64,
    pub lang: String,
    pub lang_name: String,
    pub time: String,
    pub timestamp: i64,
    pub status: i32,
    pub status_display: String,
    pub runtime: String,
    pub url: String,
    pub is_pending: String,
    pub title: String,
    pub memory: String,
    pub code: String,
    pub compare_result: String,
    pub title_slug: String,
    pub has_notes: bool,
    pub flag_type: i32,
    pub frontend_id: u64,
}

/// A page of `/api/submissions/`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubmissionsPage {
    pub submissions_dump: Vec<Submission>,
    pub has_next: bool,
    pub submissions_count: Option<u64>,
}

/// GraphQL request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// One bar of a runtime/memory percentile histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub range: String,
    pub percentage: f64,
}
