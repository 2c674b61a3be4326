use serde::{Deserialize, Serialize};

/// One day of forcing data for the crop simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub day: i8,
    pub month: i8,
    pub year: i16,
    /// Daily minimum temperature (C)
    pub t_min: f64,
    /// Daily maximum temperature (C)
    pub t_max: f64,
    /// Precipitation (mm)
    pub precipitation: f64,
    /// Reference evapotranspiration (mm)
    pub et0: f64,
}

/// Day-by-day weather covering the scenario's date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSeries {
    pub records: Vec<WeatherRecord>,
}

impl WeatherSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
