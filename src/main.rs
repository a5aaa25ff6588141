use std::process;

use clap::Parser;

use gherlint::cli::Args;
use gherlint::rule::registry::RuleRegistry;

fn main() {
    let args = Args::parse();
    let registry = RuleRegistry::new();
    match gherlint::run(args, &registry) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}
