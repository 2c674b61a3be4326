//! Scenario store document and its conversion into a season configuration.
//!
//! The store is stringly typed: every field arrives as text, including the
//! numeric observations, and the precipitation field is known to sometimes
//! carry a stray letter where a zero belongs.

use jiff::civil::Date;
use serde::Deserialize;

use irriplan_core::climate::build_weather_series;
use irriplan_core::error::ConfigError;
use irriplan_core::model::SeasonConfig;

/// Simulation year the MM/DD scenario dates resolve against.
const SIMULATION_YEAR: i16 = 2024;

/// Raw scenario document exactly as stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Season start, "MM/DD"
    pub history_from: String,
    /// Season end, "MM/DD"
    pub history_to: String,
    /// Crop name for the simulator
    pub selected_plant: String,
    /// Soil type for the simulator
    pub selected_soil_type: String,
    /// Plant-type label the result sink is keyed by
    pub selected_plant_type: String,
    /// Minimum temperature (C)
    pub temperature_min: String,
    /// Maximum temperature (C)
    pub temperature_max: String,
    /// Precipitation (mm), possibly garbled
    pub precipitation: String,
    /// Relative humidity (%), doubles as initial soil water content
    pub humidity: String,
}

impl Scenario {
    /// Validate and convert the raw document into the immutable season
    /// context. Fails before any simulation work if a field is unusable.
    pub fn season_config(&self) -> Result<SeasonConfig, ConfigError> {
        if self.selected_plant.trim().is_empty() {
            return Err(ConfigError::EmptyField("selectedPlant"));
        }
        if self.selected_soil_type.trim().is_empty() {
            return Err(ConfigError::EmptyField("selectedSoilType"));
        }

        let start = parse_month_day("historyFrom", &self.history_from)?;
        let end = parse_month_day("historyTo", &self.history_to)?;
        let t_min = parse_number("temperatureMin", &self.temperature_min)?;
        let t_max = parse_number("temperatureMax", &self.temperature_max)?;
        let precipitation =
            parse_number("precipitation", &fix_garbled_zeros(&self.precipitation))?;
        let humidity = parse_number("humidity", &self.humidity)?;

        let weather = build_weather_series(start, end, t_min, t_max, precipitation)?;

        Ok(SeasonConfig {
            crop: self.selected_plant.clone(),
            soil: self.selected_soil_type.clone(),
            season_start: start,
            season_end: end,
            initial_water_pct: humidity,
            weather,
        })
    }
}

/// Replace the stray letter the store substitutes for the digit zero.
/// Must run before numeric parsing.
pub fn fix_garbled_zeros(raw: &str) -> String {
    raw.replace(['o', 'O'], "0")
}

fn parse_month_day(field: &'static str, raw: &str) -> Result<Date, ConfigError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyField(field));
    }

    let invalid = || ConfigError::InvalidDate {
        field,
        value: raw.to_string(),
    };

    let (month, day) = value.split_once('/').ok_or_else(invalid)?;
    let month: i8 = month.trim().parse().map_err(|_| invalid())?;
    let day: i8 = day.trim().parse().map_err(|_| invalid())?;

    Date::new(SIMULATION_YEAR, month, day).map_err(|_| invalid())
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Scenario {
        Scenario {
            history_from: "05/01".to_string(),
            history_to: "06/15".to_string(),
            selected_plant: "Maize".to_string(),
            selected_soil_type: "SandyLoam".to_string(),
            selected_plant_type: "type 3".to_string(),
            temperature_min: "15.5".to_string(),
            temperature_max: "31.0".to_string(),
            precipitation: "1o.5".to_string(),
            humidity: "42".to_string(),
        }
    }

    #[test]
    fn test_garbled_precipitation_corrected() {
        assert_eq!(fix_garbled_zeros("1o.5"), "10.5");
        assert_eq!(fix_garbled_zeros("O.4"), "0.4");
        assert_eq!(fix_garbled_zeros("12.5"), "12.5");
    }

    #[test]
    fn test_season_config_happy_path() {
        let season = scenario().season_config().unwrap();

        assert_eq!(season.crop, "Maize");
        assert_eq!(season.season_start, jiff::civil::date(2024, 5, 1));
        assert_eq!(season.season_end, jiff::civil::date(2024, 6, 15));
        assert!((season.initial_water_pct - 42.0).abs() < 1e-12);
        assert_eq!(season.weather.len(), 46);
        assert!((season.weather.records[0].precipitation - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_date_rejected() {
        let mut s = scenario();
        s.history_from = "".to_string();
        let err = s.season_config().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("historyFrom")));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut s = scenario();
        s.history_to = "June 15".to_string();
        let err = s.season_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { field: "historyTo", .. }));
    }

    #[test]
    fn test_nonsense_calendar_date_rejected() {
        let mut s = scenario();
        s.history_from = "13/40".to_string();
        assert!(s.season_config().is_err());
    }

    #[test]
    fn test_non_numeric_temperature_rejected() {
        let mut s = scenario();
        s.temperature_min = "warm".to_string();
        let err = s.season_config().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber { field: "temperatureMin", .. }
        ));
    }

    #[test]
    fn test_store_document_parses_from_json() {
        let raw = r#"{
            "historyFrom": "05/01",
            "historyTo": "05/10",
            "selectedPlant": "Wheat",
            "selectedSoilType": "ClayLoam",
            "selectedPlantType": "type 1",
            "temperatureMin": "12",
            "temperatureMax": "27",
            "precipitation": "o.8",
            "humidity": "55"
        }"#;

        let scenario: Scenario = serde_json::from_str(raw).unwrap();
        let season = scenario.season_config().unwrap();
        assert_eq!(season.weather.len(), 10);
        assert!((season.weather.records[0].precipitation - 0.8).abs() < 1e-12);
    }
}
