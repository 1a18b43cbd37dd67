//! Zeckendorf arithmetic calculator CLI
//!
//! Evaluates a single arithmetic expression over `Z` values, where operands
//! are given in the `0z`-tagged Zeckendorf textual form.
//!
//! Building and running the tool:
//! `cargo build --release --bin zeck-calc`
//! `cargo run --release --bin zeck-calc`
//!
//! # Examples
//!
//! ```bash
//! zeck-calc 0z100101 + 0z1010
//! zeck-calc -- -0z1001 '*' 0z101
//! zeck-calc --int 38 + 23
//! ```

const VERSION_STRING: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_SHA"), ")");

use clap::Parser;
use std::str::FromStr;
use zeck::Z;

#[derive(Parser, Debug)]
#[command(
    name = "zeck-calc",
    version = VERSION_STRING,
    about = "Evaluate arithmetic on Zeckendorf-represented integers",
    long_about = None
)]
struct Args {
    /// Left-hand operand, in `0z`-tagged form (e.g. `0z1001` or `-0z101`)
    /// unless `--int` is given, in which case it's a plain native integer.
    lhs: String,

    /// Operator: one of `+`, `-`, `*`, `/`, `%`, `^`.
    op: String,

    /// Right-hand operand, same form as `lhs`.
    rhs: String,

    /// Interpret `lhs` and `rhs` as native decimal integers instead of
    /// `0z`-tagged Zeckendorf text.
    #[arg(long)]
    int: bool,

    /// Print the result as a native integer instead of `0z`-tagged text.
    #[arg(long)]
    as_int: bool,
}

fn parse_operand(text: &str, as_native_int: bool) -> Z {
    if as_native_int {
        match text.parse::<i64>() {
            Ok(n) => Z::from_int(n),
            Err(err) => {
                eprintln!("Error: '{text}' is not a valid native integer: {err}");
                std::process::exit(1);
            }
        }
    } else {
        match Z::from_str(text) {
            Ok(z) => z,
            Err(err) => {
                eprintln!("Error: '{text}' is not a valid Zeckendorf literal: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    let lhs = parse_operand(&args.lhs, args.int);
    let rhs = parse_operand(&args.rhs, args.int);

    let result = match args.op.as_str() {
        "+" => Ok(lhs.add(&rhs)),
        "-" => Ok(lhs.sub(&rhs)),
        "*" => Ok(lhs.mul(&rhs)),
        "/" => lhs.div(&rhs),
        "%" => lhs.rem(&rhs),
        "^" => lhs.pow(&rhs),
        other => {
            eprintln!("Error: unknown operator '{other}'. Expected one of + - * / % ^");
            std::process::exit(1);
        }
    };

    match result {
        Ok(z) => {
            if args.as_int {
                println!("{}", z.to_i64());
            } else {
                println!("{z}");
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
