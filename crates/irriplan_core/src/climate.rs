//! Climate-series construction and the simulator's weather-file format.

use std::fmt::Write;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::error::ConfigError;
use crate::model::{WeatherRecord, WeatherSeries};

/// Reference evapotranspiration (mm/day) by calendar month, January first.
pub const REFERENCE_ET0: [f64; 12] = [
    1.78, // January
    2.24, // February
    2.99, // March
    3.64, // April
    4.14, // May
    5.07, // June
    4.83, // July
    4.84, // August
    4.39, // September
    3.35, // October
    2.42, // November
    1.86, // December
];

/// Header line of the weather file the simulator consumes.
pub const CLIMATE_HEADER: &str = "Day\tMonth\tYear\tTmin(C)\tTmax(C)\tPrcp(mm)\tEt0(mm)";

/// Month → reference Et0. Months outside 1..=12 fall back to 0.0.
#[must_use]
pub fn et0_for_month(month: i8) -> f64 {
    match usize::try_from(month) {
        Ok(m @ 1..=12) => REFERENCE_ET0[m - 1],
        _ => 0.0,
    }
}

/// Expand point observations into one record per day of the season.
///
/// The observed values repeat daily; Et0 follows each day's month.
pub fn build_weather_series(
    start: Date,
    end: Date,
    t_min: f64,
    t_max: f64,
    precipitation: f64,
) -> Result<WeatherSeries, ConfigError> {
    if end < start {
        return Err(ConfigError::EmptyDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let records = start
        .series(1.day())
        .take_while(|d| *d <= end)
        .map(|d| WeatherRecord {
            day: d.day(),
            month: d.month(),
            year: d.year(),
            t_min,
            t_max,
            precipitation,
            et0: et0_for_month(d.month()),
        })
        .collect();

    Ok(WeatherSeries { records })
}

/// Render the tab-separated weather file: one header line, one row per day.
#[must_use]
pub fn format_climate_file(series: &WeatherSeries) -> String {
    let mut out = String::with_capacity(CLIMATE_HEADER.len() + 1 + series.len() * 48);
    out.push_str(CLIMATE_HEADER);
    out.push('\n');
    for record in &series.records {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            record.day,
            record.month,
            record.year,
            record.t_min,
            record.t_max,
            record.precipitation,
            record.et0,
        );
    }
    out
}
