use std::fmt;

use log::debug;
use rand::{Rng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// The shortest password the frontends let the user pick.
pub const MIN_LENGTH: usize = 4;
/// The longest password the frontends let the user pick.
pub const MAX_LENGTH: usize = 20;
/// The length a fresh configuration starts with.
pub const DEFAULT_LENGTH: usize = 6;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// One of the character classes a password can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharClass {
    /// All classes, in the order their characters are added to the pool.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE_CHARS,
            CharClass::Lower => LOWERCASE_CHARS,
            CharClass::Digits => DIGIT_CHARS,
            CharClass::Special => SPECIAL_CHARS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Upper => "Include Uppercase",
            CharClass::Lower => "Include Lowercase",
            CharClass::Digits => "Include Numbers",
            CharClass::Special => "Include Special Characters",
        }
    }
}

/// The user selected settings for password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            length: DEFAULT_LENGTH,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_special: true,
        }
    }
}

impl Configuration {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.use_upper,
            CharClass::Lower => self.use_lower,
            CharClass::Digits => self.use_digits,
            CharClass::Special => self.use_special,
        }
    }

    pub fn set_enabled(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Upper => self.use_upper = enabled,
            CharClass::Lower => self.use_lower = enabled,
            CharClass::Digits => self.use_digits = enabled,
            CharClass::Special => self.use_special = enabled,
        }
    }

    /// Builds the sampling alphabet from the enabled classes.
    ///
    /// The pool is never cached, every call reflects the current toggles.
    pub fn character_pool(&self) -> Vec<char> {
        CharClass::ALL
            .iter()
            .filter(|class| self.is_enabled(**class))
            .flat_map(|class| class.chars().chars())
            .collect()
    }
}

/// Clamps a requested length into the range the frontends allow.
pub fn clamp_length(length: i64) -> usize {
    length.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

/// Source of the random positions that are picked from the character pool.
///
/// Every `rand` generator is a provider, tests can supply a fixed sequence instead.
pub trait RandomIndex {
    /// Returns an index in `0..upper`, `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RngCore> RandomIndex for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// A generated password, the memory is wiped when it's dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct GeneratedPassword {
    value: String,
}

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("len", &self.len())
            .finish()
    }
}

/// Generates a password of `config.length` characters, each drawn independently and uniformly
/// from the character pool of the enabled classes.
pub fn generate<R: RandomIndex + ?Sized>(
    config: &Configuration,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    if config.length == 0 {
        return Err(Error::InvalidLength(0));
    }

    let pool = config.character_pool();
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }

    debug!(
        "generating password of length {} from a pool of {} characters",
        config.length,
        pool.len()
    );

    let value: String = (0..config.length)
        .map(|_| pool[rng.next_index(pool.len())])
        .collect();

    Ok(GeneratedPassword { value })
}

/// Generates a password with the thread local random generator.
pub fn password_generator(config: &Configuration) -> Result<GeneratedPassword> {
    generate(config, &mut rand::thread_rng())
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator_tests;
