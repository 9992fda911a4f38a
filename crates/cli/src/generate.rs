//! `oagen generate`

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use oagen_core::{Config, DefaultResolver, Document, GenerationReport, Generator, Severity};
use tracing::debug;

use crate::common::{format_elapsed_ms, read_file, run_command, write_file};

const DEFAULT_CONFIG_FILE: &str = "oagen.toml";

/// Flags of `oagen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Configuration file. Defaults to ./oagen.toml when it exists
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// OpenAPI document (JSON, or YAML with a .yaml/.yml extension). Overrides `input`
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Output root directory. Overrides `output.root`
    #[arg(long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// Generate without writing any file
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Run `oagen generate`, returning the process exit code.
pub fn run(args: GenerateArgs) -> i32 {
    run_command(|| run_inner(&args))
}

fn run_inner(args: &GenerateArgs) -> Result<i32, String> {
    let start = Instant::now();
    let config = load_config(args)?;
    debug!(input = %config.input.display(), root = %config.output.root.display(), "Loaded configuration.");

    let document = read_document(&config.input)?;
    let resolver = DefaultResolver::new(config);
    let report = Generator::from_config(&document, &resolver).generate_all();

    print_problems(&report);

    if args.dry_run {
        for file in &report.files {
            println!("{} {}", style("would write").dim(), file.path.display());
        }
    } else {
        for file in &report.files {
            write_file(&file.path, &file.print())?;
        }
    }

    let verb = if args.dry_run { "Generated" } else { "Wrote" };
    println!(
        "{} {} files in {}",
        style(verb).green().bold(),
        report.files.len(),
        format_elapsed_ms(start)
    );

    if report.is_success() {
        Ok(0)
    } else {
        eprintln!(
            "{} {} subject(s) produced no output",
            style("error:").red().bold(),
            report.failures.len()
        );
        Ok(1)
    }
}

fn load_config(args: &GenerateArgs) -> Result<Config, String> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    };

    let mut config = match path {
        Some(path) => {
            let content = read_file(&path)?;
            Config::from_toml_str(&content).map_err(|err| format!("{}: {err}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(input) = &args.input {
        config.input.clone_from(input);
    }
    if let Some(output) = &args.output {
        config.output.root.clone_from(output);
    }
    Ok(config)
}

/// Read a schema document; `.yaml` and `.yml` files go through `serde_yaml`.
pub fn read_document(path: &Path) -> Result<Document, String> {
    let content = read_file(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let document = if is_yaml {
        let value: serde_json::Value = serde_yaml::from_str(&content)
            .map_err(|err| format!("Failed to parse {}: {err}", path.display()))?;
        Document::from_value(value)
    } else {
        Document::from_json(&content)
    };
    document.map_err(|err| format!("{}: {err}", path.display()))
}

fn print_problems(report: &GenerationReport) {
    for diagnostic in &report.diagnostics {
        let label = match diagnostic.severity {
            Severity::Warning => style("warning:").yellow().bold(),
            Severity::Error => style("error:").red().bold(),
        };
        eprintln!("{label} {} ({})", diagnostic.message, diagnostic.location);
    }
    for failure in &report.failures {
        eprintln!(
            "{} {}: {}",
            style("failed:").red().bold(),
            failure.subject,
            failure.error
        );
    }
}
