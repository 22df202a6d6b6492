//! Password generation.

use std::borrow::Cow;
use std::collections::HashSet;

use log::{debug, trace, warn};
use zeroize::Zeroizing;

use super::charset::{self, Pool};
use crate::error::{Error, Result};
use crate::rand::{Entropy, OsEntropy, random_element, random_insert};

/// Pool overrides for [`Generator::new`]. An empty field keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorInput {
    pub lower_letters: String,
    pub upper_letters: String,
    pub digits: String,
    pub symbols: String,
}

/// Immutable set of pools; generate as many passwords as needed from one.
#[derive(Debug, Clone)]
pub struct Generator {
    lower: Pool,
    upper: Pool,
    digits: Pool,
    symbols: Pool,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Letters,
    Digits,
    Symbols,
}

impl Phase {
    fn exhausted(self) -> Error {
        match self {
            Phase::Letters => Error::LettersExceedAvailable,
            Phase::Digits => Error::DigitsExceedAvailable,
            Phase::Symbols => Error::SymbolsExceedAvailable,
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Generator {
    pub fn new(input: Option<&GeneratorInput>) -> Self {
        let defaults = GeneratorInput::default();
        let input = input.unwrap_or(&defaults);

        let generator = Generator {
            lower: Pool::or_default(&input.lower_letters, charset::DEFAULT_LOWER),
            upper: Pool::or_default(&input.upper_letters, charset::DEFAULT_UPPER),
            digits: Pool::or_default(&input.digits, charset::DEFAULT_DIGITS),
            symbols: Pool::or_default(&input.symbols, charset::DEFAULT_SYMBOLS),
        };

        for (name, pool) in generator.pools() {
            if pool.has_duplicates() {
                warn!(
                    "{name} pool repeats characters ({} of {} distinct); repeat-free passwords are limited to the distinct ones",
                    pool.distinct(),
                    pool.len()
                );
            }
        }

        generator
    }

    fn pools(&self) -> [(&'static str, &Pool); 4] {
        [
            ("lowercase", &self.lower),
            ("uppercase", &self.upper),
            ("digit", &self.digits),
            ("symbol", &self.symbols),
        ]
    }

    pub fn lower_letters(&self) -> &Pool {
        &self.lower
    }

    pub fn upper_letters(&self) -> &Pool {
        &self.upper
    }

    pub fn digits(&self) -> &Pool {
        &self.digits
    }

    pub fn symbols(&self) -> &Pool {
        &self.symbols
    }

    /// Generate a password from the OS entropy source.
    ///
    /// `length - num_digits - num_symbols` letters are drawn, then the
    /// digits, then the symbols; every character lands at a random
    /// position of the password built so far.
    pub fn generate(
        &self,
        length: usize,
        num_digits: usize,
        num_symbols: usize,
        allow_upper: bool,
        allow_repeat: bool,
    ) -> Result<String> {
        self.generate_with(&OsEntropy, length, num_digits, num_symbols, allow_upper, allow_repeat)
    }

    /// Same as [`generate`](Self::generate) with a caller-provided entropy source.
    pub fn generate_with<E: Entropy + ?Sized>(
        &self,
        source: &E,
        length: usize,
        num_digits: usize,
        num_symbols: usize,
        allow_upper: bool,
        allow_repeat: bool,
    ) -> Result<String> {
        let letters = if allow_upper {
            Cow::Owned(self.lower.join(&self.upper))
        } else {
            Cow::Borrowed(&self.lower)
        };

        let chars = num_digits
            .checked_add(num_symbols)
            .and_then(|n| length.checked_sub(n))
            .ok_or(Error::ExceedsTotalLength)?;

        if !allow_repeat {
            if chars > letters.distinct() {
                return Err(Error::LettersExceedAvailable);
            }
            if num_digits > self.digits.distinct() {
                return Err(Error::DigitsExceedAvailable);
            }
            if num_symbols > self.symbols.distinct() {
                return Err(Error::SymbolsExceedAvailable);
            }
        }

        debug!(
            "generate: length={length} letters={chars} digits={num_digits} symbols={num_symbols} upper={allow_upper} repeat={allow_repeat}"
        );

        let mut result = Zeroizing::new(Vec::new());
        result
            .try_reserve_exact(length)
            .map_err(|_| Error::TooLong(length))?;
        let phases = [
            (Phase::Letters, &*letters, chars),
            (Phase::Digits, &self.digits, num_digits),
            (Phase::Symbols, &self.symbols, num_symbols),
        ];
        for (phase, pool, count) in phases {
            fill(source, &mut result, phase, pool, count, allow_repeat)?;
        }

        Ok(result.iter().collect())
    }
}

/// Draw `count` characters from `pool` into `result`.
///
/// Without repeats a draw already present anywhere in `result` is thrown
/// away and redrawn; the unit counter only moves on an insert.
fn fill<E: Entropy + ?Sized>(
    source: &E,
    result: &mut Vec<char>,
    phase: Phase,
    pool: &Pool,
    count: usize,
    allow_repeat: bool,
) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    // Earlier phases may have consumed characters this pool shares with theirs.
    if !allow_repeat {
        let unused = pool
            .as_slice()
            .iter()
            .filter(|&&c| !result.contains(&c))
            .collect::<HashSet<_>>()
            .len();
        if count > unused {
            return Err(phase.exhausted());
        }
    }

    let mut discarded = 0usize;
    let mut added = 0;
    while added < count {
        let c = random_element(source, pool)?;
        if !allow_repeat && result.contains(&c) {
            discarded += 1;
            continue;
        }
        random_insert(source, result, c)?;
        added += 1;
    }

    if discarded > 0 {
        trace!("{phase:?}: discarded {discarded} repeated draws");
    }
    Ok(())
}
