//! Settings file parsing.
//!
//! One line, four comma-separated fields: `lower,upper,digits,symbols`.
//! `|` escapes the next character, so `|,` is a literal comma and `||` a pipe.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 4;

pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no settings file at {}, using default pools", path.display());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(());
    }

    let mut parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        warn!(
            "{}: expected {FIELDS} fields, found {}; using default pools",
            path.display(),
            parts.len()
        );
        return Ok(());
    }

    settings.symbols = parts.pop().unwrap_or_default();
    settings.digits = parts.pop().unwrap_or_default();
    settings.upper_letters = parts.pop().unwrap_or_default();
    settings.lower_letters = parts.pop().unwrap_or_default();
    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passgen/pools")
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
