//! Result sink: publishes the safety-checked threshold for the selected
//! plant type.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Published record, keyed by plant type.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedSmt {
    pub plant_type: String,
    pub smts: i64,
}

/// Writes the final threshold as a small JSON document.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn publish(&self, plant_type: &str, smt: i64) -> io::Result<()> {
        let record = PublishedSmt {
            plant_type: plant_type.to_string(),
            smts: smt,
        };
        let body = serde_json::to_string_pretty(&record).map_err(io::Error::other)?;
        fs::write(&self.path, body)
    }
}
