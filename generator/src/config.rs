use std::path::{Path, PathBuf};

use getopts::Matches;

use crate::error::GeneratorError;

#[derive(Debug)]
pub struct GenerateConfig {
    // lockfile to read
    lockfile: PathBuf,
    // where the source list goes
    output: PathBuf,
}

impl GenerateConfig {
    pub fn from_matches(matches: &Matches) -> Result<Self, GeneratorError> {
        if matches.free.len() != 2 {
            return Err(GeneratorError::Config(format!(
                "expected <manager> and <lockfile> arguments, got {}",
                matches.free.len()
            )));
        }

        let manager = matches.free[0].as_str();
        if manager != "npm" {
            return Err(GeneratorError::Config(format!(
                "unsupported package manager `{manager}`, only npm is supported"
            )));
        }

        let output = matches.opt_str("o").ok_or_else(|| {
            GeneratorError::Config("missing required option -o/--output".to_string())
        })?;

        Ok(GenerateConfig {
            lockfile: PathBuf::from(&matches.free[1]),
            output: PathBuf::from(output),
        })
    }

    pub fn get_lockfile(&self) -> &Path {
        &self.lockfile
    }

    pub fn get_output(&self) -> &Path {
        &self.output
    }
}
