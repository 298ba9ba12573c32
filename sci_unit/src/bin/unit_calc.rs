/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use log::{debug, info};

use sci_unit::{
    AtomicUnit, MeasurementSystem, ScientificValue, Unit, UnitError,
};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Scientific unit calculator
///
/// Evaluates a chain of multiplications and divisions of values with
/// units, left to right, e.g. `unit_calc 10 m/s times 5 s/kg`.
struct Args {
    /// Increase verbosity. Log messages are sent to stderr.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Output the result as JSON.
    #[clap(long)]
    json: bool,
    /// Reject units not used in this measurement system.
    #[clap(long, short)]
    system: Option<MeasurementSystem>,
    /// Convert the result to this unit.
    #[clap(long, short)]
    to: Option<Unit>,
    /// Output the result's dimension instead of its value.
    #[clap(long, short)]
    dimension: bool,
    /// List the known units.
    #[clap(long)]
    list: bool,
    /// Values and operators (times, ×, div, ÷). A `*` or `/` stays
    /// part of the value's unit, so `10 m / s` is a single value.
    expr: Vec<String>,
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Times,
    Div,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbosity {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            3.. => simplelog::LevelFilter::Trace,
        },
        simplelog::ConfigBuilder::new().build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1)
    }
}

fn run(args: &Args) -> Result<(), UnitError> {
    if args.list {
        for unit in AtomicUnit::all() {
            println!(
                "{:<8} {:<14} {}",
                unit.to_string(),
                unit.dimension().name(),
                unit.usage()
            );
        }
        return Ok(());
    }

    let mut value = evaluate(&args.expr, args.system)?;
    if let Some(unit) = &args.to {
        value = value.convert(unit)?;
    }

    match (args.dimension, args.json) {
        (false, false) => println!("{}", value),
        (true, false) => println!("{}", value.dimension()),
        (false, true) => println!("{}", to_json(&value)?),
        (true, true) => println!("{}", to_json(&value.dimension())?),
    }
    Ok(())
}

fn evaluate(
    expr: &[String],
    system: Option<MeasurementSystem>,
) -> Result<ScientificValue, UnitError> {
    let (first, rest) = split_expr(expr)?;
    let mut acc = operand(&first, system)?;
    for (op, tokens) in rest {
        let rhs = operand(&tokens, system)?;
        debug!("{:?} {} by {}", op, acc, rhs);
        acc = match op {
            Op::Times => acc.checked_times(&rhs)?,
            Op::Div => acc.checked_div(&rhs)?,
        };
    }
    info!("result: {}", acc);
    Ok(acc)
}

type Operands = (Vec<String>, Vec<(Op, Vec<String>)>);

/// Splits the arguments on operator words. Values may span several
/// arguments (`10 m/s` or `"10 m/s"`).
fn split_expr(expr: &[String]) -> Result<Operands, UnitError> {
    let mut first = Vec::new();
    let mut rest: Vec<(Op, Vec<String>)> = Vec::new();
    for token in expr.iter().flat_map(|arg| arg.split_whitespace()) {
        let op = match token {
            "times" | "×" => Some(Op::Times),
            "div" | "÷" => Some(Op::Div),
            _ => None,
        };
        match (op, rest.last_mut()) {
            (Some(op), _) => rest.push((op, Vec::new())),
            (None, Some((_, tokens))) => tokens.push(token.to_string()),
            (None, None) => first.push(token.to_string()),
        }
    }
    match first.is_empty() || rest.iter().any(|(_, t)| t.is_empty()) {
        true => Err(UnitError::ParseError(String::from(
            "missing operand in expression",
        ))),
        false => Ok((first, rest)),
    }
}

fn operand(
    tokens: &[String],
    system: Option<MeasurementSystem>,
) -> Result<ScientificValue, UnitError> {
    let value = ScientificValue::parse(&tokens.join(" "))?;
    if let Some(system) = system {
        value.unit().check_usage(system)?;
    }
    Ok(value)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, UnitError> {
    serde_json::to_string(value).map_err(|e| UnitError::Json(e.to_string()))
}
