//! tolua Invocation
//!
//! Runs the tolua binding generator on a package file. The tool's own output
//! goes straight to the console; only the exit status is inspected.

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use luabind_core::{Error, Result};

/// tolua executable wrapper
#[derive(Debug, Clone)]
pub struct ToluaInvoker {
    /// Path to the tolua executable, as configured
    tool_path: PathBuf,
}

impl ToluaInvoker {
    /// Create an invoker for a specific tool path
    pub fn with_path(tool_path: PathBuf) -> Self {
        Self { tool_path }
    }

    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }

    /// Resolve the program to spawn
    ///
    /// Paths with a directory component are taken relative to `work_dir`;
    /// a bare name is left for the `PATH` lookup.
    pub fn program(&self, work_dir: &Path) -> PathBuf {
        let bare = !self.tool_path.is_absolute() && self.tool_path.components().count() == 1;
        if bare {
            self.tool_path.clone()
        } else {
            work_dir.join(&self.tool_path)
        }
    }

    /// Build tolua command line arguments
    fn build_args(&self, package: &Path, output: &Path) -> Vec<String> {
        vec![
            "-o".to_string(),
            output.display().to_string(),
            package.display().to_string(),
        ]
    }

    /// Generate `output` from `package`, both relative to `work_dir`
    pub fn generate(&self, work_dir: &Path, package: &Path, output: &Path) -> Result<()> {
        // The child starts in work_dir, so a relative program must not be
        // joined to a relative work_dir a second time.
        let work_dir = absolute_dir(work_dir)?;
        let program = self.program(&work_dir);
        let args = self.build_args(package, output);
        let command = format!("{} {}", program.display(), args.join(" "));

        info!("{}", command);

        let status = Command::new(&program)
            .args(&args)
            .current_dir(&work_dir)
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::ToolNotFound(program.clone()),
                _ => Error::Io(e),
            })?;

        if !status.success() {
            return Err(Error::ToolFailed { command, status });
        }

        Ok(())
    }
}

/// Anchor a relative directory at the current directory
fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}
