//! Terminal prompts and messages for the front end.

use std::io::{self, BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use crossterm::style::Stylize;

use super::parse::{ParseError, Request, parse_bool, parse_count};
use crate::terminal::{RawModeGuard, flush};

/// Print a warning message to stderr (yellow)
pub fn warn(msg: &str) {
    eprintln!("{}", msg.yellow());
}

/// Print an error message to stderr (red)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn usage(program: &str) {
    println!(
        "Usage: {program} <length> <number_of_digits> <number_of_symbols> [<allow_uppercase:(false|true)> <allow_repeat:(false|true)>]"
    );
    println!("allow_uppercase and allow_repeat are optional (default is true)");
    println!("Run without arguments to be prompted for each value.");
}

/// Check if stdin is a tty
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

fn ask(input: &mut impl BufRead, label: &str) -> Result<String, ParseError> {
    print!("{label} : ");
    flush();

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line)
}

/// Prompt for the five generation parameters in order.
/// The first answer that fails to parse ends the session.
pub fn ask_request(input: &mut impl BufRead) -> Result<Request, ParseError> {
    let length = parse_count(&ask(input, "Length of the password")?)?;
    let num_digits = parse_count(&ask(input, "Total number of digits")?)?;
    let num_symbols = parse_count(&ask(input, "Total number of symbols")?)?;
    let allow_upper = parse_bool(&ask(
        input,
        "Activate the uppercase (false for NO, true for YES)",
    )?)?;
    let allow_repeat = parse_bool(&ask(
        input,
        "Activate the character repeat (false for NO, true for YES)",
    )?)?;

    Ok(Request {
        length,
        num_digits,
        num_symbols,
        allow_upper,
        allow_repeat,
    })
}

/// Block until Enter (or Esc / Ctrl-C) so a double-clicked console stays open.
pub fn wait_for_enter() {
    if !is_interactive() {
        return;
    }

    print!("Please press ENTER to quit the program ...");
    flush();

    let Ok(_guard) = RawModeGuard::new() else {
        let _ = io::stdin().lock().read_line(&mut String::new());
        return;
    };

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Enter | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                _ => {}
            },
            Ok(_) => {}
            Err(_) => break,
        }
    }
    print!("\r\n");
    let _ = io::stdout().flush();
}
