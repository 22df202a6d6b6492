//! Password generation.

pub mod charset;
mod generate;

pub use charset::Pool;
pub use generate::{Generator, GeneratorInput};
