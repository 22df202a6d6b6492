//! Operating-system CSPRNG.

use super::Entropy;

/// Entropy from the OS (`getrandom(2)` on Linux, `BCryptGenRandom` on
/// Windows, `getentropy` on macOS). Stateless, so any number of threads
/// may share it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    #[inline]
    fn fill(&self, dest: &mut [u8]) -> Result<(), getrandom::Error> {
        getrandom::getrandom(dest)
    }
}

/// Name of the entropy backend, for diagnostics.
pub fn source_name() -> &'static str {
    if cfg!(target_os = "linux") {
        "getrandom(2)"
    } else {
        "os csprng"
    }
}
