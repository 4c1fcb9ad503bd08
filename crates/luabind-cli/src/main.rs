//! luabind CLI
//!
//! Builds the tolua package from the MoSync API headers and runs tolua on it.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use luabind_core::Config;
use luabind_pkg::scan::distinct_spellings;
use luabind_pkg::{BindingPipeline, PatternTable, PointerScanner};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "luabind")]
#[command(author, version, about = "tolua binding generator driver", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Configuration file (.json, .yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the headers (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the package and run tolua on it
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Path to the tolua executable
        #[arg(short, long)]
        tool: Option<PathBuf>,

        /// Generated C file name
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package file name
        #[arg(short, long)]
        package: Option<PathBuf>,

        /// Stop after writing the package
        #[arg(long)]
        no_generate: bool,

        /// End every header with a newline before joining
        #[arg(long)]
        ensure_newline: bool,
    },

    /// List MoSync pointer types the substitution table misses
    Scan {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            source,
            tool,
            output,
            package,
            no_generate,
            ensure_newline,
        } => {
            let mut config = load_config(&source)?;
            if let Some(tool) = tool {
                config.tool = tool;
            }
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(package) = package {
                config.package = package;
            }
            config.ensure_newline |= ensure_newline;
            cmd_generate(config, no_generate)?;
        }
        Commands::Scan { source } => {
            cmd_scan(load_config(&source)?)?;
        }
        Commands::Config { source } => {
            let config = load_config(&source)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn load_config(source: &SourceArgs) -> Result<Config> {
    let mut config = match &source.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(dir) = &source.dir {
        config.work_dir = dir.clone();
    }
    Ok(config)
}

fn cmd_generate(config: Config, no_generate: bool) -> Result<()> {
    let pipeline = BindingPipeline::new(config)?;

    let report = if no_generate {
        pipeline.package_only()?
    } else {
        pipeline.run()?
    };

    println!(
        "📦 Package: {} ({} headers, {} substitutions, {} bytes)",
        report.package.display(),
        report.inputs.len(),
        report.substitutions,
        report.package_bytes
    );
    if let Some(generated) = &report.generated {
        println!("✅ Generated: {}", generated.display());
    }

    Ok(())
}

fn cmd_scan(config: Config) -> Result<()> {
    config.validate()?;
    let table = PatternTable::from_config(&config)?;
    let scanner = PointerScanner::new();
    let mut total = Vec::new();

    for path in config.input_paths() {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let uses = scanner.scan(&text, &table);

        for u in &uses {
            println!("{}:{}: {}", path.display(), u.line, u.spelling);
        }
        total.extend(uses);

        let (_, covered) = table.apply_counted(&text);
        tracing::debug!("{}: {} covered pointer uses", path.display(), covered);
    }

    if total.is_empty() {
        println!("✅ Every MoSync pointer type is covered");
    } else {
        println!(
            "\n🔍 {} uncovered uses of: {}",
            total.len(),
            distinct_spellings(&total).join(", ")
        );
    }

    Ok(())
}
