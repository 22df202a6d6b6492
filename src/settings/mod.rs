//! Persistent pool overrides.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::GeneratorInput;

/// Pool overrides read from the settings file. Empty fields mean "default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub lower_letters: String,
    pub upper_letters: String,
    pub digits: String,
    pub symbols: String,
}

impl Settings {
    /// Load from the default location. A missing file yields all defaults.
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn generator_input(&self) -> GeneratorInput {
        GeneratorInput {
            lower_letters: self.lower_letters.clone(),
            upper_letters: self.upper_letters.clone(),
            digits: self.digits.clone(),
            symbols: self.symbols.clone(),
        }
    }
}
