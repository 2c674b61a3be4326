use std::fmt;

/// Errors building the season context from scenario inputs
#[derive(Debug, Clone)]
pub enum ConfigError {
    EmptyField(&'static str),
    InvalidDate {
        field: &'static str,
        value: String,
    },
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    /// The scenario's end date precedes its start date
    EmptyDateRange {
        start: String,
        end: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyField(field) => write!(f, "scenario field {field} is missing or empty"),
            ConfigError::InvalidDate { field, value } => {
                write!(f, "scenario field {field} is not a valid MM/DD date: {value:?}")
            }
            ConfigError::InvalidNumber { field, value } => {
                write!(f, "scenario field {field} is not numeric: {value:?}")
            }
            ConfigError::EmptyDateRange { start, end } => {
                write!(f, "date range is empty: {start} to {end}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors surfaced by the crop simulator for a single evaluation
#[derive(Debug, Clone)]
pub enum OracleError {
    /// The simulator failed to run or reported a failure
    Simulator(String),
    /// The simulator ran but its output was missing required fields
    MalformedOutput(String),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::Simulator(msg) => write!(f, "simulator failed: {msg}"),
            OracleError::MalformedOutput(msg) => {
                write!(f, "simulator output unusable: {msg}")
            }
        }
    }
}

impl std::error::Error for OracleError {}

/// An optimization trial that terminated abnormally
#[derive(Debug, Clone)]
pub struct TrialError {
    /// Index of the trial within the aggregated run
    pub trial: usize,
    pub source: OracleError,
}

impl fmt::Display for TrialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trial {} failed: {}", self.trial, self.source)
    }
}

impl std::error::Error for TrialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Errors at the aggregation boundary
#[derive(Debug, Clone)]
pub enum AggregateError {
    /// Every trial failed; there is nothing to average
    AllTrialsFailed { attempted: usize },
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::AllTrialsFailed { attempted } => {
                write!(f, "all {attempted} optimization trials failed")
            }
        }
    }
}

impl std::error::Error for AggregateError {}

/// Plant-type mapping failures when publishing the result
#[derive(Debug, Clone)]
pub enum MappingError {
    UnknownPlantType(String),
    StageOutOfRange { index: usize, stages: usize },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::UnknownPlantType(label) => {
                write!(f, "plant type {label:?} not found in the mapping")
            }
            MappingError::StageOutOfRange { index, stages } => {
                write!(f, "stage index {index} out of range for {stages} stages")
            }
        }
    }
}

impl std::error::Error for MappingError {}
