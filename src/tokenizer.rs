use std::fs::File;
use std::io::{BufReader, Bytes, Read};
use std::iter::FusedIterator;
use std::path::Path;

use log::{trace, warn};

use crate::error::*;
use crate::types::*;

/// Reads words from a byte source. Each word is the longest possible
/// contiguous run of ASCII letters, folded to lowercase. Everything
/// else is a delimiter.
///
/// The sequence is lazy and can not be restarted: every word is
/// read from the source exactly once, in document order.
///
/// # Examples
///
/// ```
/// # use anagrammer::*;
/// let mut words = Words::new("Listen, Silent!".as_bytes());
/// assert!(words.advance());
/// assert_eq!(words.current(), Some("listen"));
/// assert!(words.advance());
/// assert_eq!(words.current(), Some("silent"));
/// assert!(!words.advance());
/// assert_eq!(words.current(), None);
/// ```
pub struct Words<R: Read> {
    bytes: Bytes<BufReader<R>>,
    /// One byte lookahead, `None` once the source is exhausted
    lookahead: Option<u8>,
    /// The last word found
    word: Word,
}

impl Words<File> {
    /// Opens the file at `path` for reading words, this is the only place
    /// where tokenizing can fail.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(f) => Ok(Words::new(f)),
            Err(source) => Err(AnagramError::Open {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl<R: Read> Words<R> {
    pub fn new(reader: R) -> Self {
        let mut words = Words {
            bytes: BufReader::new(reader).bytes(),
            lookahead: None,
            word: Word::new(),
        };
        words.read();
        words
    }

    /// Reads the next byte into the lookahead. A read failure counts as
    /// the end of the source.
    fn read(&mut self) {
        self.lookahead = match self.bytes.next() {
            Some(Ok(byte)) => Some(byte),
            Some(Err(e)) => {
                warn!("Read error, treating as end of input: {}", e);
                None
            }
            None => None,
        };
    }

    /// Tries to find the next word. Returns true if one was found,
    /// after which it is available through [`Words::current()`].
    pub fn advance(&mut self) -> bool {
        self.word.clear();
        while let Some(byte) = self.lookahead {
            if byte.is_ascii_alphabetic() {
                break;
            }
            self.read();
        }
        while let Some(byte) = self.lookahead {
            if !byte.is_ascii_alphabetic() {
                break;
            }
            self.word.push(byte.to_ascii_lowercase() as char);
            self.read();
        }
        if !self.word.is_empty() {
            trace!("token: {}", self.word);
        }
        !self.word.is_empty()
    }

    /// The word found by the last call to [`Words::advance()`], or `None` if it found nothing
    pub fn current(&self) -> Option<&str> {
        if self.word.is_empty() {
            None
        } else {
            Some(self.word.as_str())
        }
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(std::mem::take(&mut self.word))
        } else {
            None
        }
    }
}

impl<R: Read> FusedIterator for Words<R> {}
