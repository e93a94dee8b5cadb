use anyhow::{Context, Result};
use clap::Parser;
use rustle_rules::runtime::load_rules;
use rustle_rules::{Config, Dispatcher, Environment, ModuleRegistry};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "rustle-rules")]
#[command(about = "Apply rule files through the module registry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct RustleRulesCli {
    /// Rule files to apply, in order
    #[arg(required_unless_present = "list_modules")]
    files: Vec<PathBuf>,

    /// Report unchanged rules too
    #[arg(short, long)]
    verbose: bool,

    /// Enable trace-level diagnostics
    #[arg(long)]
    debug: bool,

    /// Directory relative paths in rules are resolved against
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// List the available modules and exit
    #[arg(long)]
    list_modules: bool,
}

fn main() -> Result<()> {
    let cli = RustleRulesCli::parse();

    let level = if cli.debug {
        tracing::Level::TRACE
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(level).init();

    let registry = ModuleRegistry::global();

    if cli.list_modules {
        for name in registry.list_modules() {
            println!("{name}");
        }
        return Ok(());
    }

    info!("Starting rustle-rules v{}", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(Config {
        verbose: cli.verbose,
        working_directory: cli.directory.clone(),
    });
    let env = Arc::new(Environment::with_defaults());
    let dispatcher = Dispatcher::new(registry, Arc::clone(&config), env);

    let mut total = 0;
    let mut changed = 0;
    for file in &cli.files {
        let rules = load_rules(file)
            .with_context(|| format!("Failed to load rules from {}", file.display()))?;
        info!("Loaded {} rules from {}", rules.len(), file.display());

        for rule in &rules {
            match dispatcher.dispatch(rule) {
                Ok(outcome) => {
                    total += 1;
                    if outcome.changed {
                        changed += 1;
                        println!("changed: {}", outcome.rule);
                    } else if config.verbose {
                        println!("ok: {}", outcome.rule);
                    }
                }
                Err(e) => {
                    error!("{e}");
                    return Err(e).with_context(|| format!("Failed applying {}", file.display()));
                }
            }
        }
    }

    println!("{total} rules applied, {changed} changed");
    Ok(())
}
