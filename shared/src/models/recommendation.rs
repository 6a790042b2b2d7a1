//! Crop recommendation and calendar models

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recommended crop with its expected economics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRecommendation {
    pub name: String,
    /// Expected profit range in ETB for the farmer's plot
    pub expected_profit_min: Decimal,
    pub expected_profit_max: Decimal,
    /// Climate resilience score in [0, 1]
    pub resilience_score: f32,
}

/// Category of a farming calendar task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Planting,
    Irrigation,
    Fertilizer,
    Harvest,
    Maintenance,
    PestControl,
}

impl FromStr for TaskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planting" | "plant" => Ok(TaskCategory::Planting),
            "irrigation" | "watering" => Ok(TaskCategory::Irrigation),
            "fertilizer" | "fertilizing" => Ok(TaskCategory::Fertilizer),
            "harvest" | "harvesting" => Ok(TaskCategory::Harvest),
            "maintenance" => Ok(TaskCategory::Maintenance),
            "pest_control" | "pest control" => Ok(TaskCategory::PestControl),
            other => Err(format!("unknown task category: {}", other)),
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskCategory::Planting => write!(f, "planting"),
            TaskCategory::Irrigation => write!(f, "irrigation"),
            TaskCategory::Fertilizer => write!(f, "fertilizer"),
            TaskCategory::Harvest => write!(f, "harvest"),
            TaskCategory::Maintenance => write!(f, "maintenance"),
            TaskCategory::PestControl => write!(f, "pest control"),
        }
    }
}

/// Priority of a farming calendar task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            other => Err(format!("unknown task priority: {}", other)),
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::High => write!(f, "high"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::Low => write!(f, "low"),
        }
    }
}

/// A single task on the farming calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarTask {
    /// Semantic identifier, unique within a result (e.g. "WEEK1_PREP")
    pub task_id: String,
    pub task: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub rationale: String,
    pub category: TaskCategory,
    pub priority: TaskPriority,
}

/// The complete advisory output for one farm profile.
///
/// Immutable once constructed; a new profile submission produces a
/// fresh result rather than mutating an old one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    /// Exactly three crops, ordered by descending suitability
    pub top_crops: Vec<CropRecommendation>,
    pub calendar: Vec<CalendarTask>,
    /// Overall confidence in [0, 1]
    pub confidence: f32,
}
