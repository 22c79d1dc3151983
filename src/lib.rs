//! This library computes a coarse phonetic code of a word, derived from the classic
//! [Metaphone](https://en.wikipedia.org/wiki/Metaphone) algorithm.
//!
//! Words that sound alike despite different spellings get the same code, which makes it useful
//! for search suggestions, deduplication or name matching.
//!
//! The code is computed by a fixed, ordered list of rewrite rules applied to the lower-cased
//! word. The result is upper-cased and truncated to a maximum length (32 by default).
//!
//! ```rust
//! use metaphone_rules::{encode, encode_with_max_length};
//!
//! assert_eq!(encode("transition"), "TRNSXN");
//! assert_eq!(encode_with_max_length("phonetics", 4), "FNTK");
//! ```
//!
//! Only ASCII letters are meaningful. Digits, punctuation and non-ASCII letters go through the
//! rules untouched, their code is not specified.
#[macro_use]
extern crate lazy_static;

use serde::{Deserialize, Serialize};

mod rules;

/// Maximum code length used by [encode] and by [Metaphone::default].
pub const DEFAULT_MAX_CODE_LENGTH: usize = 32;

/// This trait represents a phonetic algorithm.
pub trait Encoder {
    /// This method convert a string into its code.
    ///
    /// # Parameter
    ///
    /// * `s` : string to encode.
    ///
    /// # Return
    ///
    /// String encoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metaphone_rules::{Encoder, Metaphone};
    ///
    /// let metaphone = Metaphone::default();
    ///
    /// assert_eq!(metaphone.encode("hockey"), "HK");
    /// ```
    fn encode(&self, s: &str) -> String;

    /// This method check that two strings have the same code.
    ///
    /// # Parameters
    ///
    /// * `first` : first string.
    /// * `second` : second string.
    ///
    /// # Return
    ///
    /// Return `true` if both strings have the same code, false otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metaphone_rules::{Encoder, Metaphone};
    ///
    /// let metaphone = Metaphone::default();
    /// assert!(metaphone.is_encoded_equals("Smith", "Smyth"));
    /// assert!(!metaphone.is_encoded_equals("Smith", "Schmidt"));
    /// ```
    fn is_encoded_equals(&self, first: &str, second: &str) -> bool {
        let f = self.encode(first);
        let s = self.encode(second);

        f == s
    }
}

/// This is the rule based Metaphone implementation of [Encoder].
///
/// It takes a maximum code length for the `new` constructor and has
/// a [Default] implementation with a maximum code length of 32.
///
/// It can be part of a caller's configuration: a missing `max_code_length`
/// is deserialized as [DEFAULT_MAX_CODE_LENGTH].
///
/// # Example
///
/// ```rust
/// use metaphone_rules::{Encoder, Metaphone};
///
/// let metaphone = Metaphone::new(4);
///
/// assert_eq!(metaphone.encode("astronomical"), "ASTR");
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Metaphone {
    #[serde(default = "default_max_code_length")]
    max_code_length: usize,
}

fn default_max_code_length() -> usize {
    DEFAULT_MAX_CODE_LENGTH
}

impl Metaphone {
    /// Construct a new [Metaphone] with the maximum code length provided.
    ///
    /// # Parameter
    ///
    /// * `max_code_length` : the maximum code length, `0` always gives an empty code.
    pub fn new(max_code_length: usize) -> Self {
        Self { max_code_length }
    }

    /// Return the maximum code length.
    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }
}

/// [Default] implementation with a `max_code_length` of 32.
impl Default for Metaphone {
    fn default() -> Self {
        Self {
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
        }
    }
}

impl Encoder for Metaphone {
    fn encode(&self, value: &str) -> String {
        let code = rules::apply_rules(&value.to_lowercase()).to_uppercase();

        if code.chars().count() >= self.max_code_length {
            code.chars().take(self.max_code_length).collect()
        } else {
            code
        }
    }
}

/// Encode a word with a maximum code length of [DEFAULT_MAX_CODE_LENGTH].
///
/// ```rust
/// use metaphone_rules::encode;
///
/// assert_eq!(encode("buzzard"), "BSRT");
/// ```
pub fn encode(word: &str) -> String {
    Metaphone::default().encode(word)
}

/// Encode a word, keeping at most `max_length` characters of the code.
///
/// A `max_length` of zero or less gives an empty code.
///
/// ```rust
/// use metaphone_rules::encode_with_max_length;
///
/// assert_eq!(encode_with_max_length("phonetics", 4), "FNTK");
/// assert_eq!(encode_with_max_length("phonetics", 8), "FNTKS");
/// assert_eq!(encode_with_max_length("phonetics", -1), "");
/// ```
pub fn encode_with_max_length(word: &str, max_length: isize) -> String {
    let max_code_length = usize::try_from(max_length).unwrap_or(0);

    Metaphone::new(max_code_length).encode(word)
}
