//! Parsing of model-generated recommendation text
//!
//! The model is asked for strict JSON but routinely wraps it in prose
//! or code fences, so parsing starts with a string-aware balanced-brace
//! scan before handing the candidate object to serde.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use shared::{
    calendar::{classify_category, classify_priority},
    CalendarTask, CropRecommendation, RecommendationResult,
};

/// Confidence assigned when the model omits one or reports an
/// out-of-range value
pub const DEFAULT_LLM_CONFIDENCE: f32 = 0.75;

/// Number of crops a result must carry
pub const EXPECTED_CROP_COUNT: usize = 3;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why generated text could not be turned into a result
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in generated text")]
    NoJsonObject,

    #[error("generated JSON is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("generated JSON violates the schema: {0}")]
    SchemaViolation(String),
}

/// Wire shape of the model output before any checking
#[derive(Debug, Deserialize)]
struct RawRecommendation {
    top_crops: Vec<RawCrop>,
    calendar: Vec<RawTask>,
    confidence: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct RawCrop {
    name: String,
    expected_profit_min: Decimal,
    expected_profit_max: Decimal,
    resilience_score: f32,
}

#[derive(Debug, Deserialize)]
struct RawTask {
    task_id: String,
    task: String,
    date_from: String,
    date_to: String,
    rationale: String,
    category: Option<String>,
    priority: Option<String>,
}

/// Extract the first balanced `{...}` substring from free text.
///
/// Braces inside JSON string literals do not count toward nesting, so
/// a rationale like `"mulch {thickly}"` cannot truncate the scan.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse generated text into a checked [`RecommendationResult`]
pub fn parse_recommendation(text: &str) -> Result<RecommendationResult, ParseError> {
    let json = extract_json_object(text).ok_or(ParseError::NoJsonObject)?;
    let raw: RawRecommendation = serde_json::from_str(json)?;

    if raw.top_crops.len() != EXPECTED_CROP_COUNT {
        return Err(ParseError::SchemaViolation(format!(
            "expected {} crops, got {}",
            EXPECTED_CROP_COUNT,
            raw.top_crops.len()
        )));
    }

    let mut top_crops = Vec::with_capacity(raw.top_crops.len());
    for crop in raw.top_crops {
        if crop.name.trim().is_empty() {
            return Err(ParseError::SchemaViolation(
                "crop with empty name".to_string(),
            ));
        }
        if crop.expected_profit_min < Decimal::ZERO {
            return Err(ParseError::SchemaViolation(format!(
                "crop '{}' has negative expected_profit_min",
                crop.name
            )));
        }
        if crop.expected_profit_min > crop.expected_profit_max {
            return Err(ParseError::SchemaViolation(format!(
                "crop '{}' has expected_profit_min above expected_profit_max",
                crop.name
            )));
        }
        if !(0.0..=1.0).contains(&crop.resilience_score) {
            return Err(ParseError::SchemaViolation(format!(
                "crop '{}' has resilience_score outside [0, 1]",
                crop.name
            )));
        }
        top_crops.push(CropRecommendation {
            name: crop.name,
            expected_profit_min: crop.expected_profit_min,
            expected_profit_max: crop.expected_profit_max,
            resilience_score: crop.resilience_score,
        });
    }

    if raw.calendar.is_empty() {
        return Err(ParseError::SchemaViolation("empty calendar".to_string()));
    }

    let mut seen_ids = HashSet::new();
    let mut calendar = Vec::with_capacity(raw.calendar.len());
    for task in raw.calendar {
        if task.task_id.trim().is_empty() {
            return Err(ParseError::SchemaViolation(
                "task with empty task_id".to_string(),
            ));
        }
        if !seen_ids.insert(task.task_id.clone()) {
            return Err(ParseError::SchemaViolation(format!(
                "duplicate task_id '{}'",
                task.task_id
            )));
        }

        let date_from = parse_date(&task.date_from, &task.task_id, "date_from")?;
        let date_to = parse_date(&task.date_to, &task.task_id, "date_to")?;
        if date_from > date_to {
            return Err(ParseError::SchemaViolation(format!(
                "task '{}' ends before it starts",
                task.task_id
            )));
        }

        // The prompt schema does not ask for category or priority, so
        // missing or unrecognized values fall back to the classifier.
        let category = task
            .category
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| classify_category(&task.task));
        let priority = task
            .priority
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| classify_priority(category));

        calendar.push(CalendarTask {
            task_id: task.task_id,
            task: task.task,
            date_from,
            date_to,
            rationale: task.rationale,
            category,
            priority,
        });
    }

    let confidence = raw
        .confidence
        .filter(|value| (0.0..=1.0).contains(value))
        .unwrap_or(DEFAULT_LLM_CONFIDENCE);

    Ok(RecommendationResult {
        top_crops,
        calendar,
        confidence,
    })
}

fn parse_date(value: &str, task_id: &str, field: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ParseError::SchemaViolation(format!(
            "task '{}' has invalid {}: '{}'",
            task_id, field, value
        ))
    })
}
