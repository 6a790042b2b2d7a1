//! Farm profile models

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Soil types reported by smallholder intake forms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    Silt,
    Mixed,
    SandyLoam,
    ClayLoam,
}

impl FromStr for SoilType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clay" => Ok(SoilType::Clay),
            // Intake forms use both spellings
            "loam" | "loamy" => Ok(SoilType::Loam),
            "sandy" => Ok(SoilType::Sandy),
            "silt" => Ok(SoilType::Silt),
            "mixed" => Ok(SoilType::Mixed),
            "sandy_loam" | "sandy loam" => Ok(SoilType::SandyLoam),
            "clay_loam" | "clay loam" => Ok(SoilType::ClayLoam),
            other => Err(format!("unknown soil type: {}", other)),
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Clay => write!(f, "clay"),
            SoilType::Loam => write!(f, "loam"),
            SoilType::Sandy => write!(f, "sandy"),
            SoilType::Silt => write!(f, "silt"),
            SoilType::Mixed => write!(f, "mixed"),
            SoilType::SandyLoam => write!(f, "sandy loam"),
            SoilType::ClayLoam => write!(f, "clay loam"),
        }
    }
}

/// Primary water source for the plot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    Rainwater,
    Borehole,
    River,
    Well,
    Irrigation,
    Mixed,
}

impl FromStr for WaterSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rainwater" | "rainfall" | "rain" => Ok(WaterSource::Rainwater),
            "borehole" => Ok(WaterSource::Borehole),
            "river" => Ok(WaterSource::River),
            "well" => Ok(WaterSource::Well),
            "irrigation" => Ok(WaterSource::Irrigation),
            "mixed" => Ok(WaterSource::Mixed),
            other => Err(format!("unknown water source: {}", other)),
        }
    }
}

impl std::fmt::Display for WaterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterSource::Rainwater => write!(f, "rainwater"),
            WaterSource::Borehole => write!(f, "borehole"),
            WaterSource::River => write!(f, "river"),
            WaterSource::Well => write!(f, "well"),
            WaterSource::Irrigation => write!(f, "irrigation"),
            WaterSource::Mixed => write!(f, "mixed"),
        }
    }
}

/// Historical yields in kg per hectare for the four staple crops
/// tracked by the advisory program. Zero means the crop was never grown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PastYields {
    pub maize: Decimal,
    pub teff: Decimal,
    pub sorghum: Decimal,
    pub coffee: Decimal,
}

/// A validated smallholder farm profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmProfile {
    pub farmer_name: String,
    /// Kebele (smallest administrative unit in Ethiopia)
    pub kebele: String,
    pub soil_type: SoilType,
    pub altitude_meters: i32,
    /// 12 entries, index 0 = January
    pub monthly_rainfall_mm: Vec<Decimal>,
    pub past_yields_kg_per_ha: PastYields,
    /// Area in hectares
    pub plot_area: Decimal,
    pub water_source: WaterSource,
}
