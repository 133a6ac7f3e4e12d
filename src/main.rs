use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use plotcalc::{
    SymbolTable, evaluate,
    interpreter::{
        evaluator::function::core::builtins,
        sampling::{SampleRange, function_body, sample},
        symbols::CONSTANTS,
        visualizer::visualize,
    },
};
use tracing::Level;

/// plotcalc evaluates arithmetic expressions with variables, implied
/// multiplication and builtin functions, and samples functions of x for
/// plotting.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log more details to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate statements in order, sharing one set of variables.
    Eval(EvalArgs),
    /// Sample a function written as `y = f(x)` and print its points.
    Plot(PlotArgs),
    /// List the builtin functions and predefined constants.
    Functions,
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Print the parse tree of each statement below its value.
    #[arg(short, long)]
    tree: bool,

    /// Bind a variable before evaluating, e.g. `--set r=2`. The value may be
    /// an expression. Can be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, f64)>,

    /// Statements such as `x = 10`, `2x + 1` or `sin(pi / 2)`.
    #[arg(required = true, allow_hyphen_values = true)]
    statements: Vec<String>,
}

#[derive(Args, Debug)]
struct PlotArgs {
    /// Smallest x to sample.
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    x_min: f64,

    /// Largest x to sample (inclusive).
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    x_max: f64,

    /// Distance between samples.
    #[arg(long, default_value_t = 0.1)]
    step: f64,

    /// Bind a variable other than x, e.g. `--set a=3`. Can be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, f64)>,

    /// The function, e.g. `y = x^2 - 2x`.
    #[arg(allow_hyphen_values = true)]
    function: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Eval(args) => run_eval(&args),
        Command::Plot(args) => run_plot(&args),
        Command::Functions => print_functions(),
    }
}

fn run_eval(args: &EvalArgs) -> anyhow::Result<()> {
    let mut symbols = symbols_with(&args.bindings);
    let mut out = io::stdout().lock();

    for statement in &args.statements {
        let tree = match evaluate(statement, &mut symbols) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("{}", pointer(statement, e.position()));
                return Err(anyhow::Error::new(e).context(format!("Failed to evaluate `{statement}`")));
            },
        };
        writeln!(out, "{}", tree.value)?;
        if args.tree {
            write!(out, "{}", visualize(&tree, "  "))?;
        }
    }
    Ok(())
}

fn run_plot(args: &PlotArgs) -> anyhow::Result<()> {
    let body = function_body(&args.function)?;
    let range = SampleRange::new(args.x_min, args.x_max, args.step)?;
    let mut symbols = symbols_with(&args.bindings);

    let points = sample(body, &range, &mut symbols).with_context(|| {
                                                       format!("Failed to plot `{}`", args.function)
                                                   })?;

    let mut out = io::stdout().lock();
    writeln!(out, "x\ty")?;
    for (x, y) in points {
        writeln!(out, "{x}\t{y}")?;
    }
    Ok(())
}

fn print_functions() -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Operators: + - * / % ^, parentheses, assignment (x = 10) and implied multiplication (2x).")?;
    writeln!(out, "Functions (one argument, angles in radians):")?;
    for def in builtins() {
        writeln!(out, "  {:<4} {}", def.name, def.about)?;
    }
    writeln!(out, "Constants:")?;
    for (name, value) in CONSTANTS {
        writeln!(out, "  {name:<4} {value}")?;
    }
    Ok(())
}

fn symbols_with(bindings: &[(String, f64)]) -> SymbolTable {
    let mut symbols = SymbolTable::new();
    for (name, value) in bindings {
        if symbols.contains(name) {
            tracing::info!(%name, value, "overriding existing binding");
        }
        symbols.set(name, *value);
    }
    symbols
}

/// Renders `statement` with a caret under the character at byte offset
/// `position`.
fn pointer(statement: &str, position: usize) -> String {
    let column = statement.get(..position)
                          .map_or(position, |prefix| prefix.chars().count());
    format!("  {statement}\n  {}^", " ".repeat(column))
}

/// Parses a `NAME=VALUE` command-line binding.
///
/// The value is evaluated as an expression against the predefined constants,
/// so `--set r=2pi` works.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found `{binding}`"))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("`{name}` is not a valid variable name"));
    }

    let value = evaluate(value, &mut SymbolTable::new()).map_err(|e| e.to_string())?
                                                        .value;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_marks_the_offending_character() {
        assert_eq!(pointer("1 + foo", 4), "  1 + foo\n      ^");
        assert_eq!(pointer("x", 1), "  x\n   ^");
    }

    #[test]
    fn pointer_counts_characters_not_bytes() {
        let statement = "\u{3c0} + y";
        assert_eq!(pointer(statement, statement.find('y').unwrap()), "  \u{3c0} + y\n      ^");
    }

    #[test]
    fn bindings_accept_expressions() {
        assert_eq!(parse_binding("r=2"), Ok(("r".to_string(), 2.0)));
        assert_eq!(parse_binding("t = 3(1 + 1)"), Ok(("t".to_string(), 6.0)));
        assert!(parse_binding("r").is_err());
        assert!(parse_binding("2r=1").is_err());
        assert!(parse_binding("r=y").is_err());
    }

    #[test]
    fn bindings_override_constants() {
        let symbols = symbols_with(&[("pi".to_string(), 3.0), ("a".to_string(), 1.0)]);
        assert_eq!(symbols.get("pi"), Ok(3.0));
        assert_eq!(symbols.get("a"), Ok(1.0));
    }
}
