//! Farm profile validation
//!
//! Intake forms submit partially-filled JSON, so the wire shape is an
//! all-optional mirror of [`FarmProfile`]. `validate` converts the mirror
//! into a domain profile or reports the first problem it finds.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{FarmProfile, PastYields, SoilType, WaterSource};

/// Months expected in a rainfall series
pub const RAINFALL_MONTHS: usize = 12;

/// Why a submitted profile was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field '{field}' has the wrong shape: {reason}")]
    Shape { field: &'static str, reason: String },

    #[error("field '{field}' is out of range: {reason}")]
    Range { field: &'static str, reason: String },
}

impl ProfileValidationError {
    /// The profile field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ProfileValidationError::MissingField(field) => field,
            ProfileValidationError::Shape { field, .. } => field,
            ProfileValidationError::Range { field, .. } => field,
        }
    }
}

/// Wire mirror of [`PastYields`] with every crop optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PastYieldsInput {
    pub maize: Option<Decimal>,
    pub teff: Option<Decimal>,
    pub sorghum: Option<Decimal>,
    pub coffee: Option<Decimal>,
}

/// Wire mirror of [`FarmProfile`] with every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FarmProfileInput {
    pub farmer_name: Option<String>,
    pub kebele: Option<String>,
    pub soil_type: Option<String>,
    pub altitude_meters: Option<i32>,
    pub monthly_rainfall_mm: Option<Vec<Decimal>>,
    pub past_yields_kg_per_ha: Option<PastYieldsInput>,
    pub plot_area: Option<Decimal>,
    pub water_source: Option<String>,
}

impl FarmProfileInput {
    /// Validate the submission and build a domain profile.
    ///
    /// Checks run field by field and stop at the first failure, so the
    /// caller always gets one concrete thing to fix.
    pub fn validate(self) -> Result<FarmProfile, ProfileValidationError> {
        let farmer_name = self
            .farmer_name
            .ok_or(ProfileValidationError::MissingField("farmer_name"))?;
        let kebele = self
            .kebele
            .ok_or(ProfileValidationError::MissingField("kebele"))?;

        let soil_type = self
            .soil_type
            .ok_or(ProfileValidationError::MissingField("soil_type"))?;
        let soil_type: SoilType = soil_type
            .parse()
            .map_err(|reason| ProfileValidationError::Shape {
                field: "soil_type",
                reason,
            })?;

        let altitude_meters = self
            .altitude_meters
            .ok_or(ProfileValidationError::MissingField("altitude_meters"))?;
        if altitude_meters < 0 {
            return Err(ProfileValidationError::Range {
                field: "altitude_meters",
                reason: format!("altitude cannot be negative, got {}", altitude_meters),
            });
        }

        let monthly_rainfall_mm = self
            .monthly_rainfall_mm
            .ok_or(ProfileValidationError::MissingField("monthly_rainfall_mm"))?;
        if monthly_rainfall_mm.len() != RAINFALL_MONTHS {
            return Err(ProfileValidationError::Shape {
                field: "monthly_rainfall_mm",
                reason: format!(
                    "expected {} monthly values, got {}",
                    RAINFALL_MONTHS,
                    monthly_rainfall_mm.len()
                ),
            });
        }
        for (month, value) in monthly_rainfall_mm.iter().enumerate() {
            if *value < Decimal::ZERO {
                return Err(ProfileValidationError::Range {
                    field: "monthly_rainfall_mm",
                    reason: format!("month {} rainfall cannot be negative", month + 1),
                });
            }
        }

        let yields = self
            .past_yields_kg_per_ha
            .ok_or(ProfileValidationError::MissingField("past_yields_kg_per_ha"))?;
        let past_yields_kg_per_ha = PastYields {
            maize: required_yield(yields.maize, "past_yields_kg_per_ha.maize")?,
            teff: required_yield(yields.teff, "past_yields_kg_per_ha.teff")?,
            sorghum: required_yield(yields.sorghum, "past_yields_kg_per_ha.sorghum")?,
            coffee: required_yield(yields.coffee, "past_yields_kg_per_ha.coffee")?,
        };

        let plot_area = self
            .plot_area
            .ok_or(ProfileValidationError::MissingField("plot_area"))?;
        if plot_area <= Decimal::ZERO {
            return Err(ProfileValidationError::Range {
                field: "plot_area",
                reason: format!("plot area must be positive, got {} ha", plot_area),
            });
        }

        let water_source = self
            .water_source
            .ok_or(ProfileValidationError::MissingField("water_source"))?;
        let water_source: WaterSource =
            water_source
                .parse()
                .map_err(|reason| ProfileValidationError::Shape {
                    field: "water_source",
                    reason,
                })?;

        Ok(FarmProfile {
            farmer_name,
            kebele,
            soil_type,
            altitude_meters,
            monthly_rainfall_mm,
            past_yields_kg_per_ha,
            plot_area,
            water_source,
        })
    }
}

fn required_yield(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<Decimal, ProfileValidationError> {
    let value = value.ok_or(ProfileValidationError::MissingField(field))?;
    if value < Decimal::ZERO {
        return Err(ProfileValidationError::Range {
            field,
            reason: "yield cannot be negative".to_string(),
        });
    }
    Ok(value)
}

/// Check if an altitude is plausible for Ethiopian highland farming
/// (typically 500-3500m). Advisory only, never rejects a profile.
pub fn is_plausible_highland_altitude(altitude_meters: i32) -> bool {
    (500..=3500).contains(&altitude_meters)
}

/// Check if altitude is in the optimal range for highland Arabica coffee
pub fn is_optimal_coffee_altitude(altitude_meters: i32) -> bool {
    (1500..=2100).contains(&altitude_meters)
}
