//! Invocation of an external XSL-FO formatter.

use crate::error::FolioError;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

pub const DEFAULT_FORMATTER: &str = "AHFCmd";

/// A command-line XSL-FO formatter that takes Antenna House style arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER)
    }
}

impl Formatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments that format `input` into a PDF at `output`, with a progress bar and
    /// error level 3.
    pub fn arguments(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-pgbar".into(),
            "-x".into(),
            "3".into(),
            "-d".into(),
            input.as_os_str().to_owned(),
            "-p".into(),
            "@PDF".into(),
            "-o".into(),
            output.as_os_str().to_owned(),
        ]
    }

    pub fn run(&self, input: &Path, output: &Path) -> Result<(), FolioError> {
        log::info!("Running {} on {}", self.program, input.display());
        let status = Command::new(&self.program)
            .args(self.arguments(input, output))
            .status()
            .map_err(|e| FolioError::Formatter {
                program: self.program.clone(),
                message: e.to_string(),
            })?;
        if !status.success() {
            return Err(FolioError::Formatter {
                program: self.program.clone(),
                message: format!("exited with {}", status),
            });
        }
        log::info!("Wrote {}", output.display());
        Ok(())
    }
}
