//! Random password generation with exact digit/symbol counts.
//!
//! A [`Generator`] owns four character pools (lowercase, uppercase, digits,
//! symbols) and builds passwords by drawing from them with an OS-backed
//! CSPRNG, inserting every drawn character at a random position.

mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{Error, Result};
pub use pass::{Generator, GeneratorInput};
