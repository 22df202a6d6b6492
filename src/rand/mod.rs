//! Random selection backed by a cryptographically secure entropy source.

mod os;

use std::num::NonZeroUsize;

use crate::error::Result;
use crate::pass::Pool;

pub use os::{OsEntropy, source_name};

// =============================================================================
// Entropy
// =============================================================================

/// A source of cryptographically secure random bytes.
///
/// Implementations must be safe to call from several generators at once;
/// a failed fill is reported, never retried.
pub trait Entropy {
    fn fill(&self, dest: &mut [u8]) -> std::result::Result<(), getrandom::Error>;
}

impl<E: Entropy + ?Sized> Entropy for &E {
    fn fill(&self, dest: &mut [u8]) -> std::result::Result<(), getrandom::Error> {
        (**self).fill(dest)
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Uniform index in `[0, bound)`.
///
/// Draws 64-bit values and rejects the tail above the largest multiple of
/// `bound`, so no index is favoured.
pub fn random_index<E: Entropy + ?Sized>(source: &E, bound: NonZeroUsize) -> Result<usize> {
    let bound = bound.get() as u64;
    let zone = u64::MAX - (u64::MAX % bound);

    let mut buf = [0u8; 8];
    loop {
        source.fill(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}

/// Pick one character of `pool` uniformly at random.
#[inline]
pub fn random_element<E: Entropy + ?Sized>(source: &E, pool: &Pool) -> Result<char> {
    let idx = random_index(source, pool.len())?;
    Ok(pool.as_slice()[idx])
}

/// Insert `item` at a uniformly random position in `[0, seq.len()]`.
///
/// Both ends are eligible, so the item may become the first or last element.
pub fn random_insert<E: Entropy + ?Sized, T>(
    source: &E,
    seq: &mut Vec<T>,
    item: T,
) -> Result<()> {
    if seq.is_empty() {
        seq.push(item);
        return Ok(());
    }
    let pos = random_index(source, NonZeroUsize::MIN.saturating_add(seq.len()))?;
    seq.insert(pos, item);
    Ok(())
}
