//! `oagen` executable.

fn main() {
    std::process::exit(oagen_cli::run_cli(std::env::args().collect()));
}
