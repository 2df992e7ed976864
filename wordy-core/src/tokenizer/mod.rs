//! Rune-aware word tokenizer
//!
//! [`scan_words`] is the low-level, restartable split: it looks at a byte
//! buffer and reports how many bytes to consume and whether a word was
//! found. [`WordScanner`] drives it incrementally over any [`std::io::Read`]
//! source, growing its buffer when a word straddles a read boundary.
//!
//! Words are built from letters only. Punctuation is stripped without
//! splitting a word (`blar's` scans as `blars`), digits and symbols are
//! dropped, and only whitespace ends a word. Case folding is left to the
//! caller.

mod classify;
mod scanner;
mod split;

pub use classify::{classify, is_punctuation, CharClass};
pub use scanner::{ScanStats, WordScanner, DEFAULT_BUFFER_SIZE, MAX_TOKEN_SIZE};
pub use split::{scan_words, Split};
