use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::common::types::EcPrivateJwk;
use crate::error::{KeygenError, Result};

const INDENT: &[u8] = b"    ";

/// Pretty-prints the key with 4-space indentation and no trailing newline.
pub fn to_pretty_json(jwk: &EcPrivateJwk) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    jwk.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| KeygenError::invalid_field("jwk", e.to_string()))
}

/// Writes the key to `path`, truncating whatever was there.
pub fn write_jwk(path: &Path, jwk: &EcPrivateJwk) -> Result<()> {
    let text = to_pretty_json(jwk)?;
    fs::write(path, &text).map_err(|source| KeygenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(bytes = text.len(), "wrote {}", path.display());
    Ok(())
}
