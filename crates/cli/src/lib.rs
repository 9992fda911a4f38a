//! Command line front end for `oagen`.
//!
//! The binary crate only forwards `std::env::args()` to [`run_cli`] and exits
//! with the returned code.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod common;
pub mod generate;

#[derive(Parser)]
#[command(
    name = "oagen",
    version,
    about = "Generate typed clients, zod schemas and mock handlers from OpenAPI documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code from an OpenAPI document
    Generate(generate::GenerateArgs),
}

/// Parse `args` (including the program name) and run the selected command.
pub fn run_cli(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => {
                init_tracing();
                generate::run(args)
            }
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

fn init_tracing() {
    // OAGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "oagen_core=debug"
    let filter = tracing_filter(std::env::var("OAGEN_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn tracing_filter(env: Option<&str>) -> String {
    let crate_root = module_path!();
    match env {
        Some(level) if is_plain_level(level) => {
            format!("{crate_root}={level},oagen_core={level}")
        }
        Some(spec) => spec.to_string(),
        None => format!("{crate_root}=info,oagen_core=info"),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
