//! Deterministic recommendation fallback
//!
//! When no model is configured or a remote attempt fails, the engine
//! serves a reference recommendation built from the profile alone.
//! The same inputs always produce the same result.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use shared::{
    CalendarTask, CropRecommendation, FarmProfile, RecommendationResult, TaskCategory,
    TaskPriority,
};

/// Confidence reported by the deterministic path
pub const FALLBACK_CONFIDENCE: f32 = 0.87;

/// Number of weekly tasks in the synthesized calendar
pub const FALLBACK_WEEKS: usize = 6;

/// Anchor date of the fixed demo calendar
pub fn demo_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid demo anchor date")
}

/// The static reference crops for the Jimma zone, ordered by
/// descending suitability
fn reference_crops() -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            name: "Teff".to_string(),
            expected_profit_min: Decimal::from(45_000),
            expected_profit_max: Decimal::from(65_000),
            resilience_score: 0.92,
        },
        CropRecommendation {
            name: "Coffee".to_string(),
            expected_profit_min: Decimal::from(80_000),
            expected_profit_max: Decimal::from(120_000),
            resilience_score: 0.88,
        },
        CropRecommendation {
            name: "Maize".to_string(),
            expected_profit_min: Decimal::from(35_000),
            expected_profit_max: Decimal::from(55_000),
            resilience_score: 0.75,
        },
    ]
}

struct WeekTemplate {
    task_id: &'static str,
    task: &'static str,
    category: TaskCategory,
    priority: TaskPriority,
}

const WEEK_TEMPLATES: [WeekTemplate; FALLBACK_WEEKS] = [
    WeekTemplate {
        task_id: "WEEK1_PREP",
        task: "Land preparation and soil testing",
        category: TaskCategory::Maintenance,
        priority: TaskPriority::High,
    },
    WeekTemplate {
        task_id: "WEEK2_SEED",
        task: "Seed selection and treatment",
        category: TaskCategory::Planting,
        priority: TaskPriority::High,
    },
    WeekTemplate {
        task_id: "WEEK3_PLANT",
        task: "Planting and initial irrigation",
        category: TaskCategory::Planting,
        priority: TaskPriority::High,
    },
    WeekTemplate {
        task_id: "WEEK4_FERT",
        task: "First fertilizer application",
        category: TaskCategory::Fertilizer,
        priority: TaskPriority::Medium,
    },
    WeekTemplate {
        task_id: "WEEK5_WEED",
        task: "Weeding and pest monitoring",
        category: TaskCategory::Maintenance,
        priority: TaskPriority::Medium,
    },
    WeekTemplate {
        task_id: "WEEK6_WATER",
        task: "Irrigation management and growth assessment",
        category: TaskCategory::Irrigation,
        priority: TaskPriority::Medium,
    },
];

fn week_rationale(week: usize, profile: &FarmProfile) -> String {
    match week {
        0 => format!(
            "For {} soil at {}m altitude, proper land preparation is crucial for optimal crop establishment.",
            profile.soil_type, profile.altitude_meters
        ),
        1 => "Select climate-resilient varieties suitable for Jimma's rainfall pattern and treat seeds to prevent diseases.".to_string(),
        2 => format!(
            "Optimal planting window for {} water source, considering the wet season timing.",
            profile.water_source
        ),
        3 => format!(
            "Apply organic fertilizer suitable for {} soil to support early growth phase.",
            profile.soil_type
        ),
        4 => "Critical period for weed control and pest monitoring during the humid season in Jimma.".to_string(),
        _ => "Monitor soil moisture and adjust irrigation based on rainfall patterns and crop development stage.".to_string(),
    }
}

/// Build the deterministic result for a profile, anchored at `today`.
///
/// Week `i` runs from `today + 7i` to `today + 7(i + 1)`.
pub fn synthesize(profile: &FarmProfile, today: NaiveDate) -> RecommendationResult {
    let calendar = WEEK_TEMPLATES
        .iter()
        .enumerate()
        .map(|(week, template)| CalendarTask {
            task_id: template.task_id.to_string(),
            task: template.task.to_string(),
            date_from: today + Days::new(7 * week as u64),
            date_to: today + Days::new(7 * (week as u64 + 1)),
            rationale: week_rationale(week, profile),
            category: template.category,
            priority: template.priority,
        })
        .collect();

    RecommendationResult {
        top_crops: reference_crops(),
        calendar,
        confidence: FALLBACK_CONFIDENCE,
    }
}

/// The fixed demo result served without a profile.
///
/// Dates are anchored at 2024-01-15 and the rationales describe the
/// reference demo farm (loam soil at 1780m), so demos render the same
/// calendar on every run.
pub fn demo_result() -> RecommendationResult {
    let anchor = demo_anchor();
    let rationales = [
        "Proper land preparation is crucial for optimal crop establishment in loamy soil at 1780m altitude.",
        "Select climate-resilient varieties suitable for Jimma's rainfall pattern and treat seeds to prevent diseases.",
        "Optimal planting window considering the wet season timing and water source availability.",
        "Apply organic fertilizer suitable for loamy soil to support early growth phase.",
        "Critical period for weed control and pest monitoring during the humid season in Jimma.",
        "Monitor soil moisture and adjust irrigation based on rainfall patterns and crop development stage.",
    ];

    let calendar = WEEK_TEMPLATES
        .iter()
        .zip(rationales)
        .enumerate()
        .map(|(week, (template, rationale))| {
            let date_from = anchor + Days::new(7 * week as u64);
            CalendarTask {
                task_id: template.task_id.to_string(),
                task: template.task.to_string(),
                date_from,
                date_to: date_from + Days::new(6),
                rationale: rationale.to_string(),
                category: template.category,
                priority: template.priority,
            }
        })
        .collect();

    RecommendationResult {
        top_crops: reference_crops(),
        calendar,
        confidence: FALLBACK_CONFIDENCE,
    }
}
