//! Domain types shared across the optimization pipeline.

mod plant;
mod season;
mod weather;

pub use plant::{PlantType, resolve_smt};
pub use season::{IrrigationPolicy, SeasonConfig, SimulationOutput};
pub use weather::{WeatherRecord, WeatherSeries};
