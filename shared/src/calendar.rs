//! Pure calendar organization
//!
//! The browser client and the backend both bucket, search and page
//! through calendar tasks, so the logic lives here with no hidden
//! state. Which week is "current" is owned entirely by the caller.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CalendarTask, TaskCategory, TaskPriority};

/// Default number of weekly buckets shown around an anchor date
pub const DEFAULT_HORIZON_WEEKS: usize = 8;

/// A seven-day bucket of calendar tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarWeek {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub tasks: Vec<CalendarTask>,
}

/// Direction for stepping through week buckets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeekDirection {
    Previous,
    Next,
}

/// Bucket tasks into contiguous seven-day windows starting at `anchor`.
///
/// A task belongs to the week containing its `date_from`; tasks that
/// span a boundary are not split. Tasks outside the horizon are
/// dropped from the view, not reassigned.
pub fn weeks_around(
    tasks: &[CalendarTask],
    anchor: NaiveDate,
    horizon_weeks: usize,
) -> Vec<CalendarWeek> {
    (0..horizon_weeks)
        .map(|week| {
            let start = anchor + Days::new(7 * week as u64);
            let end = start + Days::new(6);
            let tasks = tasks
                .iter()
                .filter(|task| task.date_from >= start && task.date_from <= end)
                .cloned()
                .collect();
            CalendarWeek { start, end, tasks }
        })
        .collect()
}

/// All tasks active on a given date, inclusive on both ends
pub fn tasks_on_date(tasks: &[CalendarTask], date: NaiveDate) -> Vec<CalendarTask> {
    tasks
        .iter()
        .filter(|task| task.date_from <= date && date <= task.date_to)
        .cloned()
        .collect()
}

/// Case-insensitive substring search over task titles and rationales.
///
/// An empty query returns the full list. Input order is preserved.
pub fn search_tasks(tasks: &[CalendarTask], query: &str) -> Vec<CalendarTask> {
    if query.is_empty() {
        return tasks.to_vec();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.task.to_lowercase().contains(&needle)
                || task.rationale.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Step a week index in a direction, clamped to `[0, total - 1]`.
///
/// Moves past either boundary are no-ops rather than wrapping.
pub fn navigate_week(current: usize, direction: WeekDirection, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let last = total - 1;
    match direction {
        WeekDirection::Previous => current.saturating_sub(1).min(last),
        WeekDirection::Next => (current + 1).min(last),
    }
}

/// Derive a task category from its free-text description.
///
/// Used to fill in tasks whose source did not label them. Harvest is
/// checked first so "harvest planted teff" classifies as a harvest.
pub fn classify_category(text: &str) -> TaskCategory {
    let text = text.to_lowercase();
    if text.contains("harvest") {
        TaskCategory::Harvest
    } else if text.contains("plant")
        || text.contains("sow")
        || text.contains("seed")
        || text.contains("transplant")
    {
        TaskCategory::Planting
    } else if text.contains("irrigat") || text.contains("water") {
        TaskCategory::Irrigation
    } else if text.contains("fertiliz") || text.contains("compost") || text.contains("manure") {
        TaskCategory::Fertilizer
    } else if text.contains("pest")
        || text.contains("spray")
        || text.contains("insect")
        || text.contains("disease")
    {
        TaskCategory::PestControl
    } else {
        TaskCategory::Maintenance
    }
}

/// Default priority for a category when the source did not assign one
pub fn classify_priority(category: TaskCategory) -> TaskPriority {
    match category {
        TaskCategory::Planting | TaskCategory::Harvest | TaskCategory::PestControl => {
            TaskPriority::High
        }
        TaskCategory::Irrigation | TaskCategory::Fertilizer | TaskCategory::Maintenance => {
            TaskPriority::Medium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, title: &str, from: NaiveDate, to: NaiveDate) -> CalendarTask {
        CalendarTask {
            task_id: id.to_string(),
            task: title.to_string(),
            date_from: from,
            date_to: to,
            rationale: "Soil moisture is highest in this window".to_string(),
            category: TaskCategory::Maintenance,
            priority: TaskPriority::Medium,
        }
    }

    #[test]
    fn test_weeks_are_contiguous_seven_day_windows() {
        let weeks = weeks_around(&[], date(2024, 1, 15), 4);
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0].start, date(2024, 1, 15));
        assert_eq!(weeks[0].end, date(2024, 1, 21));
        assert_eq!(weeks[1].start, date(2024, 1, 22));
        assert_eq!(weeks[3].end, date(2024, 2, 11));
    }

    #[test]
    fn test_task_bucketed_by_start_date() {
        let tasks = vec![
            task("A", "Prepare beds", date(2024, 1, 15), date(2024, 1, 16)),
            task("B", "Check drainage", date(2024, 1, 21), date(2024, 1, 25)),
            task("C", "Mulch rows", date(2024, 1, 22), date(2024, 1, 23)),
        ];
        let weeks = weeks_around(&tasks, date(2024, 1, 15), 2);
        // B starts on the last day of week 0 even though it runs into week 1
        let ids: Vec<&str> = weeks[0].tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        let ids: Vec<&str> = weeks[1].tasks.iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["C"]);
    }

    #[test]
    fn test_task_before_anchor_is_dropped() {
        let tasks = vec![task("A", "Old task", date(2024, 1, 1), date(2024, 1, 2))];
        let weeks = weeks_around(&tasks, date(2024, 1, 15), 2);
        assert!(weeks.iter().all(|w| w.tasks.is_empty()));
    }

    #[test]
    fn test_tasks_on_date_inclusive_bounds() {
        let tasks = vec![task("A", "Weed plot", date(2024, 3, 4), date(2024, 3, 10))];
        assert_eq!(tasks_on_date(&tasks, date(2024, 3, 4)).len(), 1);
        assert_eq!(tasks_on_date(&tasks, date(2024, 3, 10)).len(), 1);
        assert_eq!(tasks_on_date(&tasks, date(2024, 3, 7)).len(), 1);
        assert!(tasks_on_date(&tasks, date(2024, 3, 3)).is_empty());
        assert!(tasks_on_date(&tasks, date(2024, 3, 11)).is_empty());
    }

    #[test]
    fn test_search_matches_title_and_rationale() {
        let tasks = vec![
            task("A", "Apply fertilizer", date(2024, 1, 1), date(2024, 1, 2)),
            task("B", "Weed the plot", date(2024, 1, 3), date(2024, 1, 4)),
        ];
        assert_eq!(search_tasks(&tasks, "FERTIL").len(), 1);
        // Rationale text matches too
        assert_eq!(search_tasks(&tasks, "moisture").len(), 2);
        assert!(search_tasks(&tasks, "drone").is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        let tasks = vec![
            task("A", "Apply fertilizer", date(2024, 1, 1), date(2024, 1, 2)),
            task("B", "Weed the plot", date(2024, 1, 3), date(2024, 1, 4)),
        ];
        let found = search_tasks(&tasks, "");
        assert_eq!(found, tasks);
    }

    #[test]
    fn test_navigate_clamps_at_boundaries() {
        assert_eq!(navigate_week(0, WeekDirection::Previous, 6), 0);
        assert_eq!(navigate_week(0, WeekDirection::Next, 6), 1);
        assert_eq!(navigate_week(5, WeekDirection::Next, 6), 5);
        assert_eq!(navigate_week(5, WeekDirection::Previous, 6), 4);
    }

    #[test]
    fn test_navigate_empty_calendar() {
        assert_eq!(navigate_week(0, WeekDirection::Next, 0), 0);
        assert_eq!(navigate_week(3, WeekDirection::Previous, 0), 0);
    }

    #[test]
    fn test_classify_category_keywords() {
        assert_eq!(classify_category("Plant maize seedlings"), TaskCategory::Planting);
        assert_eq!(classify_category("Harvest planted teff"), TaskCategory::Harvest);
        assert_eq!(classify_category("Set up drip irrigation"), TaskCategory::Irrigation);
        assert_eq!(classify_category("Apply compost to beds"), TaskCategory::Fertilizer);
        assert_eq!(classify_category("Spray for coffee berry borer"), TaskCategory::PestControl);
        assert_eq!(classify_category("Repair fences"), TaskCategory::Maintenance);
    }

    #[test]
    fn test_classify_priority_by_category() {
        assert_eq!(classify_priority(TaskCategory::Planting), TaskPriority::High);
        assert_eq!(classify_priority(TaskCategory::Harvest), TaskPriority::High);
        assert_eq!(classify_priority(TaskCategory::PestControl), TaskPriority::High);
        assert_eq!(classify_priority(TaskCategory::Irrigation), TaskPriority::Medium);
        assert_eq!(classify_priority(TaskCategory::Maintenance), TaskPriority::Medium);
    }
}
