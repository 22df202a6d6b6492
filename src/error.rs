//! Errors returned by password generation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("random source failure: {0}")]
    RandomSource(#[from] getrandom::Error),

    #[error("number of digits and symbols must be less than total length")]
    ExceedsTotalLength,

    #[error("password length {0} is too large to allocate")]
    TooLong(usize),

    #[error("number of letters exceeds available letters and repeats are not allowed")]
    LettersExceedAvailable,

    #[error("number of digits exceeds available digits and repeats are not allowed")]
    DigitsExceedAvailable,

    #[error("number of symbols exceeds available symbols and repeats are not allowed")]
    SymbolsExceedAvailable,
}

pub type Result<T> = std::result::Result<T, Error>;
