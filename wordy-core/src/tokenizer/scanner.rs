//! Buffered word scanning over any reader

use std::io::{self, Read};

use super::split::{scan_words, Split};
use crate::api::{Error, Result};

/// Default initial buffer size in bytes (4KB)
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024;

/// Default upper bound on the bytes a single pending word may span (64KB)
pub const MAX_TOKEN_SIZE: usize = 64 * 1024;

/// Counters collected while scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Total bytes pulled from the reader
    pub bytes_read: usize,
    /// Number of tokens produced
    pub tokens: usize,
    /// Bytes of punctuation stripped from produced tokens
    pub punctuation_bytes: usize,
}

/// Pull-based word scanner.
///
/// Keeps a growable buffer over `reader`, drives [`scan_words`] over the
/// unconsumed bytes and reads more whenever the split asks for it. A word
/// that would need more than `max_token_size` buffered bytes is an error.
pub struct WordScanner<R> {
    reader: R,
    buffer: Vec<u8>,
    /// Start of unconsumed data
    start: usize,
    /// End of valid data
    end: usize,
    max_token_size: usize,
    eof: bool,
    done: bool,
    stats: ScanStats,
}

impl<R: Read> WordScanner<R> {
    /// Create a scanner with the default buffer limits
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BUFFER_SIZE, MAX_TOKEN_SIZE)
    }

    /// Create a scanner with an explicit initial buffer size and token limit
    pub fn with_capacity(reader: R, buffer_size: usize, max_token_size: usize) -> Self {
        let max_token_size = max_token_size.max(1);
        let buffer_size = buffer_size.clamp(1, max_token_size);

        Self {
            reader,
            buffer: vec![0; buffer_size],
            start: 0,
            end: 0,
            max_token_size,
            eof: false,
            done: false,
            stats: ScanStats::default(),
        }
    }

    /// Counters collected so far
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Produce the next token, or `None` once the reader is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while !self.done {
            let split = scan_words(&self.buffer[self.start..self.end], self.eof);
            self.start += split.advance();

            match split {
                Split::Word {
                    token, punctuation, ..
                }
                | Split::Final {
                    token, punctuation, ..
                } => {
                    self.stats.tokens += 1;
                    self.stats.punctuation_bytes += punctuation;
                    return Ok(Some(token));
                }
                Split::Skip { .. } => {
                    if self.eof && self.start == self.end {
                        self.done = true;
                    }
                }
                Split::NeedMore { .. } => {
                    if let Err(e) = self.fill() {
                        self.done = true;
                        return Err(e);
                    }
                }
            }
        }

        Ok(None)
    }

    /// Compact the buffer and read more bytes, growing up to the token limit
    fn fill(&mut self) -> Result<()> {
        if self.start > 0 {
            self.buffer.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.buffer.len() {
            if self.buffer.len() >= self.max_token_size {
                return Err(Error::TokenTooLong {
                    limit: self.max_token_size,
                });
            }
            let grown = (self.buffer.len() * 2).min(self.max_token_size);
            log::debug!("growing scan buffer to {grown} bytes");
            self.buffer.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buffer[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    self.stats.bytes_read += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }
}

impl<R: Read> Iterator for WordScanner<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
