//! primebench CLI
//!
//! Counts the primes up to a bound (one million by default) and prints
//! `RESULT:<count>`. The `suite` subcommand runs several named cases.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use primebench::report::{self, ReportData};
use primebench::{BenchConfig, measure, result_line, run_case, warm_up};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(ClapParser)]
#[command(name = "primebench")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count primes by trial division and print RESULT:<count>", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Upper bound for the count (default 1000000); not valid with `suite`
    #[arg(short, long)]
    limit: Option<u64>,

    /// Upper bound for the warm-up pass, 0 to skip (default 1000)
    #[arg(long, global = true)]
    warmup: Option<u64>,

    /// Path to a benchmark configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every configured case and print BENCH lines
    Suite,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Suite cases carry their own limits
    if cli.limit.is_some() && cli.command.is_some() {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--limit only applies to the default count, not to a subcommand",
            )
            .exit();
    }

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if let Some(warmup) = cli.warmup {
        config = config.with_warmup_limit(warmup);
    }

    match cli.command {
        None => {
            if let Some(limit) = cli.limit {
                config = config.with_limit(limit);
            }
            run_count(&config);
        }
        Some(Commands::Suite) => {
            run_suite(&config);
        }
        Some(Commands::Completions { shell }) => {
            run_completions(shell);
        }
    }
}

fn init_logging(verbose: u8) -> Result<(), String> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // -v applies on top of whatever RUST_LOG sets for other targets
    let directive: Directive = format!("primebench={}", level)
        .parse()
        .map_err(|e| format!("Invalid log directive: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<BenchConfig, String> {
    match path {
        Some(path) => {
            let config = BenchConfig::from_file(path)?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(BenchConfig::default()),
    }
}

fn run_count(config: &BenchConfig) {
    warm_up(config.warmup_limit);

    let measurement = measure(config.limit);
    println!("{}", result_line(measurement.count));

    report::emit_from_env(&ReportData::new(&measurement, config.warmup_limit));
}

fn run_suite(config: &BenchConfig) {
    warm_up(config.warmup_limit);

    let mut failed = 0;
    for case in &config.cases {
        let outcome = run_case(case);
        println!("{}", outcome.bench_line());

        if !outcome.passed() {
            error!(
                case = %case.name,
                limit = case.limit,
                expected = ?case.expected,
                actual = outcome.measurement.count,
                "count mismatch"
            );
            failed += 1;
        }
    }

    info!("{} cases run, {} failed", config.cases.len(), failed);
    if failed > 0 {
        process::exit(2);
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "primebench", &mut io::stdout());
}
