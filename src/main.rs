use std::{fs, io, path::PathBuf, process::ExitCode};

use aslang::{
    interpreter::{
        evaluator::core::{Context, DEFAULT_MAX_DEPTH, EvalConfig},
        repl::repl,
    },
    run_source_with,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

/// aslang runs programs of a small imperative scripting language, given as
/// syntax tree text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tree file to run. Without one, aslang starts an interactive session.
    file: Option<PathBuf>,

    /// Maximum nesting depth of evaluated nodes.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter)
         .with_target(false)
         .with_writer(io::stderr)
         .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let config = EvalConfig { max_depth: args.max_depth };
    let mut context = Context::with_config(io::stdin().lock(), io::stdout(), config);

    let result = match &args.file {
        Some(path) => {
            let Ok(source) = fs::read_to_string(path) else {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          path.display());
                return ExitCode::FAILURE;
            };
            run_source_with(&mut context, &source)
        },
        None => repl(&mut context).map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
