//! HTTP handlers for the stateless calendar organizer
//!
//! The task list travels in the request body; the server holds no
//! calendar state between calls.

use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use shared::calendar::{self, CalendarWeek, DEFAULT_HORIZON_WEEKS};
use shared::CalendarTask;

use crate::error::{AppError, AppResult};

/// Upper bound on requested week horizons (two years)
const MAX_HORIZON_WEEKS: usize = 104;

/// Request body for week bucketing
#[derive(Debug, Deserialize)]
pub struct CalendarWeeksRequest {
    pub calendar: Vec<CalendarTask>,
    pub anchor_date: NaiveDate,
    pub horizon_weeks: Option<usize>,
}

/// Bucket tasks into weekly windows around an anchor date
pub async fn get_calendar_weeks(
    Json(request): Json<CalendarWeeksRequest>,
) -> AppResult<Json<Vec<CalendarWeek>>> {
    let horizon = request.horizon_weeks.unwrap_or(DEFAULT_HORIZON_WEEKS);
    if horizon == 0 || horizon > MAX_HORIZON_WEEKS {
        return Err(AppError::ValidationError(format!(
            "horizon_weeks must be between 1 and {}",
            MAX_HORIZON_WEEKS
        )));
    }

    Ok(Json(calendar::weeks_around(
        &request.calendar,
        request.anchor_date,
        horizon,
    )))
}

/// Request body for task search
#[derive(Debug, Deserialize)]
pub struct CalendarSearchRequest {
    pub calendar: Vec<CalendarTask>,
    #[serde(default)]
    pub query: String,
}

/// Search tasks by title and rationale
pub async fn search_calendar_tasks(
    Json(request): Json<CalendarSearchRequest>,
) -> Json<Vec<CalendarTask>> {
    Json(calendar::search_tasks(&request.calendar, &request.query))
}

/// Request body for per-date task lookup
#[derive(Debug, Deserialize)]
pub struct TasksOnDateRequest {
    pub calendar: Vec<CalendarTask>,
    pub date: NaiveDate,
}

/// List tasks active on a given date
pub async fn get_tasks_on_date(Json(request): Json<TasksOnDateRequest>) -> Json<Vec<CalendarTask>> {
    Json(calendar::tasks_on_date(&request.calendar, request.date))
}
