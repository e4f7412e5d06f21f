use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use elements_querying::suite;

#[derive(Parser)]
#[command(name = "elements-querying")]
#[command(about = "Checks lazy querying algorithms against their eager results", long_about = None)]
#[command(version)]
struct Cli {
    /// Run only this check group (repeatable)
    #[arg(short, long = "group")]
    groups : Vec<String>,

    /// List the check groups in run order and exit
    #[arg(long)]
    list : bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose : u8,
}

fn main() {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.list {
        for group in suite::GROUPS.iter() {
            println!("{}", group.name);
        }
        return;
    }

    let run = suite::run(&cli.groups);
    match &run {
        Ok(report) => match report.finish() {
            Ok(checks) => info!(checks, "all checks passed"),
            Err(e) => error!("{}", e),
        },
        Err(e) => error!("{}", e),
    }

    process::exit(suite::exit_status(&run));
}
