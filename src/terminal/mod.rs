//! Shared terminal utilities.

mod raw_mode;

use std::io::{self, Write};

pub use raw_mode::*;

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}
