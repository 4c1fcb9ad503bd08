//! Binding pipeline
//!
//! Reads and substitutes each header, writes the joined package, then hands
//! the package to tolua. Any failure aborts the run at that step.

use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use luabind_core::{Config, Result};

use crate::concat::{concatenate, write_package};
use crate::substitute::{read_transformed, PatternTable};
use crate::tolua::ToluaInvoker;

/// Summary of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Headers read, in order
    pub inputs: Vec<PathBuf>,
    /// Total replacements across all headers
    pub substitutions: usize,
    /// Size of the package written
    pub package_bytes: usize,
    /// Package file path
    pub package: PathBuf,
    /// Generated source path, if tolua ran
    pub generated: Option<PathBuf>,
}

/// The header → package → tolua pipeline
pub struct BindingPipeline {
    config: Config,
    table: PatternTable,
    invoker: ToluaInvoker,
}

impl BindingPipeline {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let table = PatternTable::from_config(&config)?;
        let invoker = ToluaInvoker::with_path(config.tool.clone());
        Ok(Self {
            config,
            table,
            invoker,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Read every header and write the package, without running tolua
    pub fn package_only(&self) -> Result<PipelineReport> {
        let inputs = self.config.input_paths();
        let mut parts = Vec::with_capacity(inputs.len());
        let mut substitutions = 0;

        for path in &inputs {
            let header = read_transformed(path, &self.table)?;
            substitutions += header.substitutions;
            parts.push(header.text);
        }

        let package = self.config.package_path();
        let contents = concatenate(&parts, self.config.ensure_newline);
        write_package(&package, &contents)?;

        info!(
            "Packaged {} headers into {:?} ({} substitutions)",
            inputs.len(),
            package,
            substitutions
        );

        Ok(PipelineReport {
            inputs,
            substitutions,
            package_bytes: contents.len(),
            package,
            generated: None,
        })
    }

    /// Run the whole pipeline
    pub fn run(&self) -> Result<PipelineReport> {
        let mut report = self.package_only()?;

        self.invoker.generate(
            &self.config.work_dir,
            &self.config.package,
            &self.config.output,
        )?;

        let generated = self.config.output_path();
        info!("Generated {:?}", generated);
        report.generated = Some(generated);

        Ok(report)
    }
}
