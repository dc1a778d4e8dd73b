use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::KeygenConfig;

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Default targets pointed at a fresh temporary directory
pub fn temp_config() -> TestResult<(TempDir, KeygenConfig)> {
    let dir = tempfile::tempdir()?;
    let config = KeygenConfig::with_output_dir(dir.path());
    Ok((dir, config))
}

/// Reads a written key file back as untyped JSON
pub fn read_json(path: &Path) -> TestResult<serde_json::Value> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Decoded byte length of a base64url member
pub fn decoded_len(value: &serde_json::Value, field: &str) -> TestResult<usize> {
    let encoded = value[field]
        .as_str()
        .ok_or_else(|| format!("missing field {}", field))?;
    Ok(URL_SAFE_NO_PAD.decode(encoded)?.len())
}
