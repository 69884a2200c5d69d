use std::io;

use clap::Parser;
use env_logger::Env;
use stackcalc::{
    get_result,
    repl::{Config, DEFAULT_MAX_LENGTH, Repl},
};

/// stackcalc is an integer calculator for infix expressions with `+`, `-`,
/// `*`, `/` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this expression once and exits instead of starting the
    /// prompt.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Longest accepted input line in characters. 0 lifts the limit.
    #[arg(short, long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Skips the welcome banner.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(expression) = args.expression {
        match get_result(&expression) {
            Ok(v) => println!("{v}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let config = Config { max_length: (args.max_length > 0).then_some(args.max_length),
                          banner:     !args.quiet, };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = Repl::new(stdin.lock(), stdout.lock(), config).run() {
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }
}
