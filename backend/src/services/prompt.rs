//! Recommendation prompt construction

use chrono::NaiveDate;
use shared::{ClimateReference, FarmProfile};

/// Build the agronomist prompt for one farm profile.
///
/// The profile and climate reference are embedded as pretty-printed
/// JSON so the model sees the same field names the API uses, and the
/// schema block pins the exact output shape the parser expects.
pub fn build_recommendation_prompt(
    profile: &FarmProfile,
    climate: &ClimateReference,
    today: NaiveDate,
) -> String {
    let profile_json =
        serde_json::to_string_pretty(profile).expect("farm profile serializes to JSON");
    let climate_json =
        serde_json::to_string_pretty(climate).expect("climate reference serializes to JSON");

    format!(
        r#"You are IndieCrop, an AI agronomist assistant specialized in Jimma, Ethiopia. Your job is to analyze the following farm profile and 10-year climate data, then recommend the most suitable high-value or climate-resilient crops for the specific plot or kebele.

Farm Profile:
{profile_json}

10-year Climate Summary (Jimma):
{climate_json}

Today's date: {today}

Instructions:
1. Based on the farm profile and climate data, recommend the top 3 crops best suited for planting this season.
2. Focus on high-value or climate-resilient crops considering soil, rainfall, altitude, and past yields.
3. For each crop, provide:
   - Name
   - Expected profit range (min and max in Ethiopian Birr)
   - Resilience score (0 to 1, where 1 means highly resilient)
4. Generate a 6-week actionable crop calendar with weekly tasks, each task containing:
   - Task ID
   - Task description
   - Start date and end date (ISO format, starting from today)
   - Rationale explaining the importance of the task given the climate and farm profile

Return ONLY strict JSON matching this schema:
{{
  "top_crops": [
    {{
      "name": string,
      "expected_profit_min": number,
      "expected_profit_max": number,
      "resilience_score": number
    }}
  ],
  "calendar": [
    {{
      "task_id": string,
      "task": string,
      "date_from": "YYYY-MM-DD",
      "date_to": "YYYY-MM-DD",
      "rationale": string
    }}
  ],
  "confidence": number
}}"#
    )
}
