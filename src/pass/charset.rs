//! Character pools for password generation.

use std::collections::HashSet;
use std::num::NonZeroUsize;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "~!@#$%^&*()_+`-={}|[]\\:\"<>?,./";

pub const DEFAULT_LOWER: Builtin = Builtin::new(LOWERCASE);
pub const DEFAULT_UPPER: Builtin = Builtin::new(UPPERCASE);
pub const DEFAULT_DIGITS: Builtin = Builtin::new(DIGITS);
pub const DEFAULT_SYMBOLS: Builtin = Builtin::new(SYMBOLS);

/// A built-in ASCII character set, checked non-empty at compile time.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    chars: &'static str,
    len: NonZeroUsize,
}

impl Builtin {
    const fn new(chars: &'static str) -> Self {
        assert!(chars.is_ascii(), "built-in charset must be ASCII");
        match NonZeroUsize::new(chars.len()) {
            Some(len) => Builtin { chars, len },
            None => panic!("built-in charset must not be empty"),
        }
    }
}

/// An ordered, never-empty set of characters eligible for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<char>,
    len: NonZeroUsize,
    distinct: usize,
}

impl Pool {
    /// Pool of the characters of `custom`; `None` when it is empty.
    pub fn new(custom: &str) -> Option<Self> {
        let chars: Vec<char> = custom.chars().collect();
        let len = NonZeroUsize::new(chars.len())?;
        Some(Self::from_parts(chars, len))
    }

    /// `custom` if it has any characters, otherwise the built-in set.
    pub fn or_default(custom: &str, default: Builtin) -> Self {
        Self::new(custom)
            .unwrap_or_else(|| Self::from_parts(default.chars.chars().collect(), default.len))
    }

    fn from_parts(chars: Vec<char>, len: NonZeroUsize) -> Self {
        let distinct = chars.iter().collect::<HashSet<_>>().len();
        Pool {
            chars,
            len,
            distinct,
        }
    }

    /// Concatenation of two pools, `self` first.
    pub fn join(&self, other: &Pool) -> Pool {
        let mut chars = Vec::with_capacity(self.chars.len() + other.chars.len());
        chars.extend_from_slice(&self.chars);
        chars.extend_from_slice(&other.chars);
        Self::from_parts(chars, self.len.saturating_add(other.len.get()))
    }

    #[inline]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Number of different characters; lower than `len` if the pool repeats one.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    pub fn has_duplicates(&self) -> bool {
        self.distinct != self.chars.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}
