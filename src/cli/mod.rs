//! CLI module for elm-build-graph

mod args;

pub use args::Args;

use crate::analysis::Analyzer;
use crate::config::{Config, CONFIG_FILE};
use crate::error::Result;
use crate::output::{Graphviz, ViewGenerator};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here too
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(args.verbose);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nERROR: {}", e);
            if e.is_usage() {
                eprintln!("\n{}", Args::help_text());
            }
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(CONFIG_FILE))?,
    };

    cfg.merge_cli(args.output.clone(), args.exclude.clone());
    cfg.validate()?;
    Ok(cfg)
}

fn execute(args: Args) -> Result<()> {
    let cfg = load_config(&args)?;
    let path = &args.path;

    if args.verbose {
        println!("Project: {}", path.display());
        println!("Output: {}", cfg.output.directory.display());
        println!("Exclude: {:?}", cfg.project.exclude);
        println!("Layout: {} | {}", cfg.layout.tred, cfg.layout.dot);
    }

    Analyzer::check_project(path)?;

    let analyzer = Analyzer::new(&cfg)?.with_verbose(args.verbose);

    println!("Scanning {}...", path.display());
    let analysis = analyzer.analyze(path)?;
    let stats = analysis.graph.stats();
    println!(
        "Scan complete: {} files, {} modules, {} dependencies",
        analysis.modules.len(),
        stats.modules,
        stats.edges
    );

    if args.show_excluded {
        if stats.excluded == 0 {
            println!("\nNo imports excluded");
        } else {
            println!("\nExcluded imports ({}):", stats.excluded);
            for (module, imports) in analysis.graph.excluded() {
                println!("  {}: {}", module, imports.join(", "));
            }
        }
    }

    if let Some(json_path) = &args.json {
        let json = serde_json::to_string_pretty(&analysis.graph)?;
        std::fs::write(json_path, json)?;
        println!("Dependency graph written to {}", json_path.display());
    }

    println!("\nGenerating view...");
    let generator = ViewGenerator::new(&cfg, Graphviz::new(&cfg.layout))?;
    let report = generator.generate(&analysis.graph)?;

    println!("{}", report.summary());
    println!("Output: {}", report.artifacts.view.display());

    Ok(())
}
