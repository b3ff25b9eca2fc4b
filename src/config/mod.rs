// src/config/mod.rs
pub mod types;

pub use self::types::{PipelineConfig, RankToml, CONFIG_FILE, OUTPUT_FILE};
use crate::error::{RankError, Result};
use std::fs;
use std::path::{Path, PathBuf};

impl PipelineConfig {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Creates a config for `root` and applies `wikirank.toml` from the root
    /// directory when it exists.
    ///
    /// # Errors
    /// Returns `Config` if the file exists but cannot be read or parsed.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self::new(root);
        let path = config.root.join(CONFIG_FILE);
        if path.is_file() {
            config.apply_file(&path)?;
        }
        Ok(config)
    }

    /// Overlays settings from a TOML file.
    ///
    /// # Errors
    /// Returns `Config` if the file cannot be read or parsed.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| RankError::Config(format!("cannot read {}: {e}", path.display())))?;
        self.apply_toml(&content)
            .map_err(|e| RankError::Config(format!("{}: {e}", path.display())))
    }

    /// Overlays settings from TOML text.
    ///
    /// # Errors
    /// Returns the TOML decode error for malformed input or unknown keys.
    pub fn apply_toml(&mut self, content: &str) -> std::result::Result<(), toml::de::Error> {
        let file: RankToml = toml::from_str(content)?;
        self.apply(file);
        Ok(())
    }

    pub fn apply(&mut self, file: RankToml) {
        if let Some(iterations) = file.iterations {
            self.iterations = iterations;
        }
        if let Some(damping) = file.damping {
            self.damping = damping;
        }
        if let Some(parallelism) = file.parallelism {
            self.parallelism = parallelism;
        }
        if let Some(output) = file.output {
            self.output = Some(output);
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `Config` if damping is outside `(0, 1]` or parallelism is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(RankError::Config(format!(
                "damping factor must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.parallelism == 0 {
            return Err(RankError::Config(
                "parallelism must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Where the ranking is written: the configured path, else
    /// `<root>/pagerank.txt`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.root.join(OUTPUT_FILE))
    }
}
