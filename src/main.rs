use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use mint::{
    config::{Config, DEFAULT_RECURSION_LIMIT},
    interpret_line,
    interpreter::evaluator::core::{Context, Outcome},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// mint is a small expression language with integer and float arithmetic
/// and user-defined functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run line by line. Without one, mint reads from standard
    /// input with a prompt.
    file: Option<PathBuf>,

    /// Log each evaluated statement and every function call.
    #[arg(short, long)]
    verbose: bool,

    /// Print the environment after every line.
    #[arg(short, long)]
    show_env: bool,

    /// Maximum number of nested function applications.
    #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT)]
    max_depth: usize,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(if verbose {
                                                                         "mint=debug"
                                                                     } else {
                                                                         "warn"
                                                                     })
                                                  });
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn report(line: &str, number: usize, context: &mut Context) {
    match interpret_line(line, number, context) {
        Ok(Outcome::Empty) => {},
        Ok(outcome) => println!("{outcome}"),
        Err(e) => eprintln!("{e}"),
    }
    if context.config().show_environment {
        println!("{}", context.environment);
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config { recursion_limit: args.max_depth,
                          show_environment: args.show_env,
                          ..Config::default() };
    let mut context = Context::with_config(config);

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                                                  eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                            path.display());
                                                  std::process::exit(1);
                                              });
        for (index, line) in script.lines().enumerate() {
            report(line, index + 1, &mut context);
        }
        return;
    }

    let stdin = io::stdin();
    let mut number = 0;
    loop {
        print!("{}", context.config().prompt);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        number += 1;
        report(line.trim_end_matches(['\r', '\n']), number, &mut context);
    }
}
