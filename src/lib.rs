pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod formatter;
pub mod fs;
pub mod linter;
pub mod pattern;
pub mod rule;

use anyhow::{Context, Result};

use cli::Args;
use config::{load_config, validate_config};
use formatter::{create_formatter, exit_code, OutputFormat};
use fs::{resolve_ignore, select_files};
use rule::registry::RuleRegistry;

/// Run the linter. Returns the exit code: 0 = clean, 1 = lint errors found.
/// Pipeline failures (bad arguments, missing config, unknown rules) come
/// back as `Err` and terminate the process without producing results.
///
/// Rules are supplied through `registry` by the embedding application; the
/// core ships none of its own.
pub fn run(args: Args, registry: &RuleRegistry) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;

    let ignore = resolve_ignore(&args.ignore, &cwd)?;
    let files = select_files(&args.paths, &ignore, &cwd)?;

    if args.debug {
        eprintln!("debug: {} ignore patterns", ignore.len());
        eprintln!("debug: {} files to lint", files.len());
        eprintln!("debug: {} rules registered", registry.len());
    }

    let config = load_config(args.config.as_deref(), &cwd)?;
    validate_config(&config, registry)?;

    let results = linter::lint(&files, &config, registry, &cwd)?;

    let format = OutputFormat::resolve(args.format.as_deref())?;
    let formatter = create_formatter(format);
    formatter.print(&results);

    Ok(exit_code(&results))
}
