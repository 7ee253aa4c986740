// Submission details query and histogram parsing
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::models::{DistributionBucket, GraphQlRequest};

pub const SUBMISSION_DETAILS_OPERATION: &str = "submissionDetails";

pub const SUBMISSION_DETAILS_QUERY: &str = r#"
query submissionDetails($submissionId: Int!) {
  submissionDetails(submissionId: $submissionId) {
    runtime
    runtimeDisplay
    runtimePercentile
    runtimeDistribution
    memory
    memoryDisplay
    memoryPercentile
    memoryDistribution
    code
    timestamp
    statusCode
    user {
      username
      profile {
        realName
        userAvatar
      }
    }
    lang {
      name
      verboseName
    }
    question {
      questionId
      titleSlug
      hasFrontendPreview
    }
    notes
    flagType
    topicTags {
      tagId
      slug
      name
    }
    runtimeError
    compileError
    lastTestcase
    codeOutput
    expectedOutput
    totalCorrect
    totalTestcases
    fullCodeOutput
    testDescriptions
    testBodies
    testInfo
    stdOutput
  }
}"#;

static SUBMISSION_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/submissions/detail/(\d+)/").expect("valid regex"));

/// GraphQL envelope asking for one submission's details
pub fn submission_details_request(submission_id: u64) -> GraphQlRequest {
    GraphQlRequest {
        query: SUBMISSION_DETAILS_QUERY.to_string(),
        variables: json!({ "submissionId": submission_id }),
        operation_name: Some(SUBMISSION_DETAILS_OPERATION.to_string()),
    }
}

/// `.../submissions/detail/<id>/...` -> `<id>`
pub fn extract_submission_id(url: &str) -> Option<u64> {
    SUBMISSION_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Runtime histogram, ranges in milliseconds
pub fn parse_runtime_distribution(raw: &str) -> Vec<DistributionBucket> {
    parse_distribution(raw, |range| Some(format!("{}ms", range)))
}

/// Memory histogram, upstream ranges are KB and rendered as MB
pub fn parse_memory_distribution(raw: &str) -> Vec<DistributionBucket> {
    parse_distribution(raw, |range| {
        let kb = leading_integer(range)?;
        Some(format!("{:.1}MB", kb as f64 / 1000.0))
    })
}

// Integer prefix of `s` after leading whitespace: "16400.7" and "16400kb" both give 16400
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits_len == 0 {
        return None;
    }
    s[..sign_len + digits_len].parse().ok()
}

// Raw form: {"lang": "...", "distribution": [["<range>", <pct>], ...]}
// Any malformed entry invalidates the whole histogram.
fn parse_distribution(
    raw: &str,
    format_range: impl Fn(&str) -> Option<String>,
) -> Vec<DistributionBucket> {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    let Some(entries) = parsed.get("distribution").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| {
            let pair = entry.as_array()?;
            let range = match pair.first()? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            let percentage = pair.get(1)?.as_f64()?;
            Some(DistributionBucket {
                range: format_range(&range)?,
                percentage,
            })
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}
