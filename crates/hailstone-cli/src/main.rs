//! hailstone CLI
//!
//! Prints the Collatz sequence for a positive integer, one step per line.
//!
//! Usage:
//!   hailstone <number>              Print every step down to 1
//!   hailstone <number> <max-steps>  Stop after <max-steps> steps

use hailstone_core::{compute, compute_capped, Sequence};

fn print_usage() {
    eprintln!("hailstone - Compute the Collatz sequence for a positive integer");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  hailstone <number>              Print every step down to 1");
    eprintln!("  hailstone <number> <max-steps>  Stop after <max-steps> steps");
}

/// Parse the starting value. Rejects zero here so the error message names
/// the original argument text, signs included.
fn parse_start(arg: &str) -> Result<u64, String> {
    match arg.parse::<u64>() {
        Ok(0) | Err(_) => Err(format!("'{}' is not a positive integer", arg)),
        Ok(n) => Ok(n),
    }
}

fn parse_cap(arg: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .map_err(|_| format!("'{}' is not a valid step cap", arg))
}

/// Render the sequence, one `Step N: value` line per step, with a
/// trailing notice when the cap cut it short.
fn render(seq: &Sequence) -> String {
    let mut out = String::new();
    for step in seq.steps() {
        out.push_str(&format!("Step {:>2}: {}\n", step.index, step.value));
    }
    if seq.is_truncated() {
        out.push_str(&format!("(truncated after {} steps)\n", seq.len() - 1));
    }
    out
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        print_usage();
        std::process::exit(1);
    }

    if matches!(args[1].as_str(), "-h" | "--help" | "help") {
        print_usage();
        std::process::exit(0);
    }

    let start = match parse_start(&args[1]) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.get(2) {
        Some(cap_arg) => match parse_cap(cap_arg) {
            Ok(cap) => compute_capped(start, cap),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => compute(start),
    };

    match result {
        Ok(seq) => print!("{}", render(&seq)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
