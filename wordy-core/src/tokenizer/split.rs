//! Restartable word split over a byte buffer

use super::classify::{classify, CharClass};

/// Outcome of one [`scan_words`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    /// The buffer ended inside a word and more input may follow.
    ///
    /// `advance` covers only the leading whitespace that was skipped; the
    /// caller keeps the rest and retries once more bytes are available.
    NeedMore {
        /// Bytes that may be discarded
        advance: usize,
    },
    /// A region without letters was consumed; no token.
    Skip {
        /// Bytes consumed
        advance: usize,
    },
    /// A whitespace-terminated word.
    Word {
        /// Bytes consumed, including the terminating whitespace
        advance: usize,
        /// Letters of the word, in input order
        token: String,
        /// Width in bytes of the punctuation stripped from the word
        punctuation: usize,
    },
    /// An unterminated word at the end of input.
    Final {
        /// Bytes consumed
        advance: usize,
        /// Letters of the word, in input order
        token: String,
        /// Width in bytes of the punctuation stripped from the word
        punctuation: usize,
    },
}

impl Split {
    /// Number of bytes the caller may drop from the front of its buffer
    pub fn advance(&self) -> usize {
        match self {
            Split::NeedMore { advance }
            | Split::Skip { advance }
            | Split::Word { advance, .. }
            | Split::Final { advance, .. } => *advance,
        }
    }

    /// The produced token, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Split::Word { token, .. } | Split::Final { token, .. } => Some(token),
            Split::NeedMore { .. } | Split::Skip { .. } => None,
        }
    }

    /// Check if the scan wants more bytes before it can decide
    pub fn needs_more(&self) -> bool {
        matches!(self, Split::NeedMore { .. })
    }
}

/// One decoded code point at the front of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoded {
    Char(char, usize),
    /// A valid prefix of a multi-byte sequence cut off by the buffer end
    Incomplete,
}

/// Decode the first code point of `data`.
///
/// Invalid bytes decode as U+FFFD with width 1. A truncated sequence is
/// reported as incomplete unless `at_eof` is set.
fn decode(data: &[u8], at_eof: bool) -> Decoded {
    let probe = &data[..data.len().min(4)];
    let valid = match std::str::from_utf8(probe) {
        Ok(s) => s,
        Err(e) if e.valid_up_to() > 0 => {
            // The prefix up to `valid_up_to` is known-good UTF-8.
            std::str::from_utf8(&probe[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(e) => {
            if e.error_len().is_none() && !at_eof {
                return Decoded::Incomplete;
            }
            return Decoded::Char(char::REPLACEMENT_CHARACTER, 1);
        }
    };

    match valid.chars().next() {
        Some(ch) => Decoded::Char(ch, ch.len_utf8()),
        None => Decoded::Char(char::REPLACEMENT_CHARACTER, 1),
    }
}

/// Split the next word off the front of `data`.
///
/// Leading whitespace is skipped. Letters accumulate into the token,
/// punctuation is consumed and stripped, anything else is consumed and
/// dropped. Only whitespace terminates a word. `at_eof` marks the final
/// call: no more bytes will follow `data`.
///
/// A produced token is never empty.
pub fn scan_words(data: &[u8], at_eof: bool) -> Split {
    let mut start = 0;
    while start < data.len() {
        match decode(&data[start..], at_eof) {
            Decoded::Char(ch, width) if ch.is_whitespace() => start += width,
            Decoded::Char(..) => break,
            Decoded::Incomplete => return Split::NeedMore { advance: start },
        }
    }

    let mut token = String::new();
    let mut punctuation = 0;
    let mut i = start;
    while i < data.len() {
        let (ch, width) = match decode(&data[i..], at_eof) {
            Decoded::Char(ch, width) => (ch, width),
            Decoded::Incomplete => break,
        };

        match classify(ch) {
            CharClass::Whitespace => {
                let advance = i + width;
                return if token.is_empty() {
                    Split::Skip { advance }
                } else {
                    Split::Word {
                        advance,
                        token,
                        punctuation,
                    }
                };
            }
            CharClass::Letter => token.push(ch),
            CharClass::Punctuation => punctuation += width,
            CharClass::Other => {}
        }

        i += width;
    }

    if !at_eof {
        return Split::NeedMore { advance: start };
    }

    let advance = data.len();
    if token.is_empty() {
        Split::Skip { advance }
    } else {
        Split::Final {
            advance,
            token,
            punctuation,
        }
    }
}
