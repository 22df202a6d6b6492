//! RNG test binary - outputs random bytes to stdout for statistical testing.
//!
//! Every byte is one `random_index(256)` draw, so the stream exercises the
//! same rejection sampling the password generator relies on.
//!
//! Usage:
//!   ./rng_test                # Stream until the reader goes away
//!   ./rng_test --count 1M     # Stop after N bytes (K, M, G suffixes)
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::process::ExitCode;

use passgen::rand::{OsEntropy, random_index, source_name};

const BYTE_RANGE: NonZeroUsize = NonZeroUsize::new(256).unwrap();

/// Parse byte count with optional K, M, G suffix
fn parse_byte_count(s: &str) -> Option<usize> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };
    num_str.parse::<usize>().ok()?.checked_mul(multiplier)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let limit = match args.get(1..).unwrap_or_default() {
        [] => None,
        [flag, n] if flag == "--count" || flag == "-n" => match parse_byte_count(n) {
            Some(n) => Some(n),
            None => {
                eprintln!("Invalid byte count: {n}");
                return ExitCode::from(2);
            }
        },
        _ => {
            let program = args.first().map_or("rng_test", String::as_str);
            eprintln!("Usage: {program} [--count <N[K|M|G]>]");
            return ExitCode::from(2);
        }
    };

    eprintln!("rng_test: entropy source {}", source_name());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = [0u8; 65536];
    let mut written: usize = 0;

    loop {
        let to_write = match limit {
            Some(limit) if written >= limit => break,
            Some(limit) => (limit - written).min(buf.len()),
            None => buf.len(),
        };

        for byte in buf[..to_write].iter_mut() {
            match random_index(&OsEntropy, BYTE_RANGE) {
                Ok(v) => *byte = v as u8,
                Err(e) => {
                    eprintln!("rng_test: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }

        // Reader closed the pipe
        if out.write_all(&buf[..to_write]).is_err() {
            break;
        }
        written += to_write;
    }

    let _ = out.flush();
    ExitCode::SUCCESS
}
