//! Regional climate reference data

use serde::{Deserialize, Serialize};

/// Ten-year climate summary for a growing region, embedded into
/// recommendation prompts alongside the farm profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClimateReference {
    pub region: String,
    /// Monthly mean temperature in degrees Celsius, index 0 = January
    pub average_temperature_c: [i32; 12],
    /// Monthly mean relative humidity percent, index 0 = January
    pub humidity_percent: [i32; 12],
    pub drought_years: Vec<i32>,
    pub flood_years: Vec<i32>,
}

impl ClimateReference {
    /// The Jimma zone reference series used by the advisory engine.
    pub fn jimma() -> Self {
        Self {
            region: "Jimma, Ethiopia".to_string(),
            average_temperature_c: [22, 23, 23, 24, 25, 25, 24, 24, 23, 22, 21, 22],
            humidity_percent: [75, 73, 74, 78, 82, 85, 84, 83, 79, 77, 76, 74],
            drought_years: vec![2012, 2015],
            flood_years: vec![2016, 2018],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jimma_reference_series_lengths() {
        let climate = ClimateReference::jimma();
        assert_eq!(climate.average_temperature_c.len(), 12);
        assert_eq!(climate.humidity_percent.len(), 12);
        assert_eq!(climate.drought_years, vec![2012, 2015]);
        assert_eq!(climate.flood_years, vec![2016, 2018]);
    }
}
