//! WebAssembly module for the IndieCrop Advisory Engine
//!
//! Provides client-side computation for:
//! - Offline farm profile validation
//! - Calendar week bucketing and navigation
//! - Task search and per-date lookup

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

use shared::calendar::{self, WeekDirection, DEFAULT_HORIZON_WEEKS};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_calendar(calendar_json: &str) -> Result<Vec<CalendarTask>, JsValue> {
    serde_json::from_str(calendar_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid calendar JSON: {}", e)))
}

fn parse_date(date: &str) -> Result<NaiveDate, JsValue> {
    date.parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", date, e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization: {}", e)))
}

/// Validate a farm profile form submission offline.
///
/// Returns the normalized profile as JSON, or the validation message
/// for the first rejected field.
#[wasm_bindgen]
pub fn validate_farm_profile(profile_json: &str) -> Result<String, JsValue> {
    let input: FarmProfileInput = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))?;

    let profile = input
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&profile)
}

/// Bucket a task calendar into weekly windows around an anchor date
#[wasm_bindgen]
pub fn calendar_weeks(
    calendar_json: &str,
    anchor_date: &str,
    horizon_weeks: Option<usize>,
) -> Result<String, JsValue> {
    let tasks = parse_calendar(calendar_json)?;
    let anchor = parse_date(anchor_date)?;
    let horizon = horizon_weeks.unwrap_or(DEFAULT_HORIZON_WEEKS);

    to_json(&calendar::weeks_around(&tasks, anchor, horizon))
}

/// List tasks whose window contains the given date
#[wasm_bindgen]
pub fn tasks_on_date(calendar_json: &str, date: &str) -> Result<String, JsValue> {
    let tasks = parse_calendar(calendar_json)?;
    let date = parse_date(date)?;

    to_json(&calendar::tasks_on_date(&tasks, date))
}

/// Search tasks by title and rationale
#[wasm_bindgen]
pub fn search_calendar_tasks(calendar_json: &str, query: &str) -> Result<String, JsValue> {
    let tasks = parse_calendar(calendar_json)?;

    to_json(&calendar::search_tasks(&tasks, query))
}

/// Step the selected week index forward or backward, clamped to range
#[wasm_bindgen]
pub fn navigate_calendar_week(current_week: usize, forward: bool, total_weeks: usize) -> usize {
    let direction = if forward {
        WeekDirection::Next
    } else {
        WeekDirection::Previous
    };
    calendar::navigate_week(current_week, direction, total_weeks)
}

/// Classify a free-text task description into a category label
#[wasm_bindgen]
pub fn classify_task_category(text: &str) -> String {
    format!("{}", calendar::classify_category(text))
}

/// Check whether an altitude is plausible for highland farming
#[wasm_bindgen]
pub fn is_plausible_altitude(altitude_meters: i32) -> bool {
    is_plausible_highland_altitude(altitude_meters)
}

/// Check whether an altitude sits in the optimal coffee band
#[wasm_bindgen]
pub fn is_coffee_altitude(altitude_meters: i32) -> bool {
    is_optimal_coffee_altitude(altitude_meters)
}

/// Sum a monthly rainfall series (millimeters)
#[wasm_bindgen]
pub fn total_annual_rainfall(rainfall_json: &str) -> Result<f64, JsValue> {
    let monthly: Vec<Decimal> = serde_json::from_str(rainfall_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid rainfall JSON: {}", e)))?;

    let total: Decimal = monthly.iter().sum();
    Ok(total.to_string().parse().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_calendar_json() -> String {
        r#"[
            {
                "task_id": "WEEK1_PREP",
                "task": "Land preparation and soil testing",
                "date_from": "2024-01-15",
                "date_to": "2024-01-21",
                "rationale": "Loam soil drains well",
                "category": "maintenance",
                "priority": "high"
            },
            {
                "task_id": "WEEK3_PLANT",
                "task": "Planting and initial irrigation",
                "date_from": "2024-01-29",
                "date_to": "2024-02-04",
                "rationale": "Rainfall supports establishment",
                "category": "planting",
                "priority": "high"
            }
        ]"#
        .to_string()
    }

    #[test]
    fn test_validate_farm_profile_normalizes_spellings() {
        let input = r#"{
            "farmer_name": "Abebe Kebede",
            "kebele": "Mana",
            "soil_type": "loamy",
            "altitude_meters": 1780,
            "monthly_rainfall_mm": [90, 70, 110, 150, 190, 210, 230, 220, 180, 140, 90, 70],
            "past_yields_kg_per_ha": {"maize": 2500, "teff": 1800, "sorghum": 2200, "coffee": 1200},
            "plot_area": 2.5,
            "water_source": "rainfall"
        }"#;

        let normalized = validate_farm_profile(input).unwrap();
        let profile: FarmProfile = serde_json::from_str(&normalized).unwrap();
        assert_eq!(profile.soil_type, SoilType::Loam);
        assert_eq!(profile.water_source, WaterSource::Rainwater);
    }

    #[test]
    fn test_tasks_on_date_json_round_trip() {
        let result = tasks_on_date(&sample_calendar_json(), "2024-01-30").unwrap();
        let tasks: Vec<CalendarTask> = serde_json::from_str(&result).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_id, "WEEK3_PLANT");
    }

    #[test]
    fn test_search_matches_rationale() {
        let result = search_calendar_tasks(&sample_calendar_json(), "rainfall").unwrap();
        let tasks: Vec<CalendarTask> = serde_json::from_str(&result).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_id, "WEEK3_PLANT");
    }

    #[test]
    fn test_navigate_calendar_week_clamps() {
        assert_eq!(navigate_calendar_week(0, false, 8), 0);
        assert_eq!(navigate_calendar_week(7, true, 8), 7);
        assert_eq!(navigate_calendar_week(3, true, 8), 4);
        assert_eq!(navigate_calendar_week(3, false, 8), 2);
    }

    #[test]
    fn test_classify_task_category() {
        assert_eq!(classify_task_category("Sow teff seeds"), "planting");
        assert_eq!(classify_task_category("Spray against leaf rust"), "pest control");
    }

    #[test]
    fn test_total_annual_rainfall() {
        let total = total_annual_rainfall("[100, 50.5, 20]").unwrap();
        assert!((total - 170.5).abs() < 0.001);
    }

    #[test]
    fn test_altitude_checks() {
        assert!(is_plausible_altitude(1780));
        assert!(!is_plausible_altitude(4200));
        assert!(is_coffee_altitude(1780));
        assert!(!is_coffee_altitude(900));
    }
}
