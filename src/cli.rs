use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gherlint", version, about = "A fast Gherkin feature file linter")]
pub struct Args {
    /// Feature files, directories or glob patterns to lint
    pub paths: Vec<String>,

    /// Output format (stylish or json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Comma-separated glob patterns to ignore, overriding the ignore file
    #[arg(short, long, value_name = "PATTERNS", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}
