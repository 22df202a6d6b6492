//! Positional argument parsing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid boolean: {0} (expected true or false)")]
    InvalidBool(String),

    #[error("Expected 3 or 5 arguments, got {0}")]
    WrongArgCount(usize),

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// The five generation parameters gathered from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub num_digits: usize,
    pub num_symbols: usize,
    pub allow_upper: bool,
    pub allow_repeat: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Help,
    Version,
    Args(Request),
}

pub fn parse(args: &[String]) -> Result<Mode, ParseError> {
    let rest = args.get(1..).unwrap_or_default();

    match rest {
        [] => Ok(Mode::Interactive),
        [flag] if flag == "-h" || flag == "--help" => Ok(Mode::Help),
        [flag] if flag == "-v" || flag == "--version" => Ok(Mode::Version),
        [length, digits, symbols] => Ok(Mode::Args(Request {
            length: parse_count(length)?,
            num_digits: parse_count(digits)?,
            num_symbols: parse_count(symbols)?,
            allow_upper: true,
            allow_repeat: true,
        })),
        [length, digits, symbols, upper, repeat] => Ok(Mode::Args(Request {
            length: parse_count(length)?,
            num_digits: parse_count(digits)?,
            num_symbols: parse_count(symbols)?,
            allow_upper: parse_bool(upper)?,
            allow_repeat: parse_bool(repeat)?,
        })),
        _ => Err(ParseError::WrongArgCount(rest.len())),
    }
}

pub fn parse_count(s: &str) -> Result<usize, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.trim().to_string()))
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Result<bool, ParseError> {
    match s.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseError::InvalidBool(s.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_interactive() {
        assert_eq!(parse(&args(&[])).unwrap(), Mode::Interactive);
    }

    #[test]
    fn three_args_default_flags() {
        let mode = parse(&args(&["8", "2", "1"])).unwrap();
        assert_eq!(
            mode,
            Mode::Args(Request {
                length: 8,
                num_digits: 2,
                num_symbols: 1,
                allow_upper: true,
                allow_repeat: true,
            })
        );
    }

    #[test]
    fn five_args() {
        let Mode::Args(req) = parse(&args(&["12", "0", "3", "false", "T"])).unwrap() else {
            panic!("expected args mode");
        };
        assert!(!req.allow_upper);
        assert!(req.allow_repeat);
        assert_eq!(req.num_symbols, 3);
    }

    #[test]
    fn wrong_counts_rejected() {
        let lists: [&[&str]; 4] = [
            &["8"],
            &["8", "2"],
            &["8", "2", "1", "true"],
            &["1", "2", "3", "4", "5", "6"],
        ];
        for list in lists {
            assert!(matches!(
                parse(&args(list)),
                Err(ParseError::WrongArgCount(n)) if n == list.len()
            ));
        }
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&args(&["--help"])).unwrap(), Mode::Help);
        assert_eq!(parse(&args(&["-v"])).unwrap(), Mode::Version);
    }

    #[test]
    fn bad_number() {
        assert!(matches!(
            parse(&args(&["eight", "2", "1"])),
            Err(ParseError::InvalidNumber(s)) if s == "eight"
        ));
        assert!(matches!(
            parse(&args(&["-1", "0", "0"])),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn bad_bool() {
        assert!(matches!(
            parse(&args(&["8", "2", "1", "yes", "true"])),
            Err(ParseError::InvalidBool(s)) if s == "yes"
        ));
    }

    #[test]
    fn bool_spellings() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool(s).unwrap());
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_bool(s).unwrap());
        }
        assert!(parse_bool("tRuE").is_err());
    }

    #[test]
    fn counts_trim_whitespace() {
        assert_eq!(parse_count(" 16\n").unwrap(), 16);
    }
}
