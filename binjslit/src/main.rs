//! jslit command-line tool for checking and inspecting JavaScript literals.
//!
//! Usage: jslit [OPTIONS] [FILE|-]
//!
//! Options:
//!   -e, --expr <LITERAL>   Parse LITERAL instead of reading a file
//!   -p, --pretty           Print the value over multiple lines
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   -v, --verbose          Raise the log level (repeatable)
//!   -h, --help             Print help
//!   -V, --version          Print version

use libjslit::{parse, ParseError};
use std::fs;
use std::io::{self, Read};
use std::process;
use tracing::{debug, info, Level};

/// Environment variable holding the default log level.
const LOG_ENV: &str = "JSLIT_LOG";

/// Where the literal comes from.
enum Input {
    Stdin,
    File(String),
    Expr(String),
}

impl Input {
    /// Name used in diagnostics.
    fn name(&self) -> &str {
        match self {
            Input::Stdin => "<stdin>",
            Input::File(path) => path,
            Input::Expr(_) => "<expr>",
        }
    }

    fn read(&self) -> io::Result<String> {
        match self {
            Input::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            Input::File(path) => fs::read_to_string(path),
            Input::Expr(text) => Ok(text.clone()),
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut input: Option<Input> = None;
    let mut check_only = false;
    let mut pretty = false;
    let mut verbosity = 0usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("jslit {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-e" | "--expr" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --expr requires an argument");
                    process::exit(1);
                }
                set_input(&mut input, Input::Expr(args[i].clone()));
            }
            "-p" | "--pretty" => {
                pretty = true;
            }
            "--check" => {
                check_only = true;
            }
            "--verbose" => {
                verbosity += 1;
            }
            // -v, -vv, -vvv
            arg if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') => {
                verbosity += arg.len() - 1;
            }
            "-" => {
                set_input(&mut input, Input::Stdin);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            path => {
                set_input(&mut input, Input::File(path.to_string()));
            }
        }
        i += 1;
    }

    init_logging(verbosity);

    let input = input.unwrap_or(Input::Stdin);
    let text = match input.read() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {}", input.name(), e);
            process::exit(1);
        }
    };
    debug!(input = input.name(), chars = text.chars().count(), "read input");

    match parse(&text) {
        Ok(value) => {
            info!(input = input.name(), "parsed");
            if check_only {
                return;
            }
            if pretty {
                println!("{:#?}", value);
            } else {
                println!("{:?}", value);
            }
        }
        Err(e) => {
            eprint!("{}", render_error(&e, input.name()));
            process::exit(1);
        }
    }
}

fn set_input(slot: &mut Option<Input>, input: Input) {
    if slot.is_some() {
        eprintln!("Error: Multiple inputs not supported");
        process::exit(1);
    }
    *slot = Some(input);
}

/// Log level from `-v` count, falling back to `JSLIT_LOG`, then `warn`.
fn log_level(verbosity: usize, env: Option<&str>) -> Level {
    match verbosity {
        0 => env
            .and_then(|s| s.trim().parse::<Level>().ok())
            .unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(verbosity: usize) {
    let env = std::env::var(LOG_ENV).ok();
    let level = log_level(verbosity, env.as_deref());
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Caret-style diagnostic for a failed parse.
fn render_error(e: &ParseError, name: &str) -> String {
    let (line, col) = e.line_col();
    format!(
        "error: {}\n --> {}:{}:{}\n{}\n",
        e,
        name,
        line + 1,
        col + 1,
        e.snippet()
    )
}

fn print_help() {
    println!(
        "jslit - JavaScript literal checker

USAGE:
    jslit [OPTIONS] [FILE|-]

ARGS:
    [FILE|-]    Input file (reads from stdin if not provided or '-')

OPTIONS:
    -e, --expr <LITERAL>   Parse LITERAL instead of reading a file

    -p, --pretty           Print the value over multiple lines

    --check                Check if input is valid (exit 0 if valid, 1 if invalid)
                           Prints nothing on success

    -v, --verbose          Raise the log level; repeat for more detail
                           [default: ${} or warn]

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Print the value of a literal
    jslit -e \"{{a: [1,, 0x2n]}}\"

    # Validate a file
    jslit --check config.lit

    # Show where parsing stops
    echo \"[1 2]\" | jslit",
        LOG_ENV
    );
}
