use std::path::{Path, PathBuf};

use crate::common::types::Algorithm;

/// One output file and the algorithm its key is generated for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyTarget {
    pub algorithm: Algorithm,
    pub file_name: String,
}

impl KeyTarget {
    pub fn new(algorithm: Algorithm, file_name: impl Into<String>) -> Self {
        Self {
            algorithm,
            file_name: file_name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeygenConfig {
    pub output_dir: PathBuf,
    pub targets: Vec<KeyTarget>,
}

impl KeygenConfig {
    /// Default targets, written under `dir` instead of the working directory.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn path_for(&self, target: &KeyTarget) -> PathBuf {
        self.output_dir.join(&target.file_name)
    }
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            output_dir: Path::new(".").to_path_buf(),
            targets: vec![
                KeyTarget::new(Algorithm::Es384, "ec-pri-valid-p384.json"),
                KeyTarget::new(Algorithm::Es512, "ec-pri-valid-p521.json"),
            ],
        }
    }
}
