use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::weather::WeatherSeries;

/// Immutable season context built once per run from the scenario store.
///
/// Shared read-only by every concurrent trial; nothing in the pipeline
/// mutates it after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Crop name understood by the simulator (e.g. "Maize")
    pub crop: String,
    /// Soil type understood by the simulator (e.g. "SandyLoam")
    pub soil: String,
    /// Planting date
    pub season_start: Date,
    /// End of the simulated season
    pub season_end: Date,
    /// Initial soil water content as a percent of capacity
    pub initial_water_pct: f64,
    pub weather: WeatherSeries,
}

/// Irrigation policy evaluated by the simulator: one soil-moisture
/// depletion threshold per growth stage plus a seasonal cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationPolicy {
    /// Trigger percentages, one per growth stage, nominally in [0, 100]
    pub smts: Vec<f64>,
    /// Seasonal irrigation cap (mm)
    pub max_irr_season: f64,
}

/// Aggregate outputs of one simulator run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Mean yield potential (tonne/ha)
    pub mean_yield_potential: f64,
    /// Mean seasonal irrigation (mm)
    pub mean_seasonal_irrigation: f64,
}
