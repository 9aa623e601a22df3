//! JSON input/output of scene parameters.
//!
//! Fields use the camelCase control names (`sunAltitude`, `offsetX`, ...).
//! Missing fields take their default values. Values are not range-checked
//! here, load them through a `ParameterStore` to apply the range policy.

use super::params::SceneParameters;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Writes scene parameters to a JSON file.
pub fn write_params(path: &Path, params: &SceneParameters) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, params)
        .with_context(|| format!("Failed to serialize parameters to: {}", path.display()))?;

    Ok(())
}

/// Reads scene parameters from a JSON file.
pub fn read_params(path: &Path) -> Result<SceneParameters> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let params: SceneParameters = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize parameters from: {}", path.display()))?;

    Ok(params)
}

pub fn to_params_string(params: &SceneParameters) -> Result<String> {
    serde_json::to_string_pretty(params).context("Failed to serialize parameters to string")
}

pub fn from_params_string(json: &str) -> Result<SceneParameters> {
    serde_json::from_str(json).context("Failed to deserialize parameters from string")
}
