use std::fmt;

/// Number of letters in the alphabet (a-z)
pub const ALPHABET_SIZE: usize = 26;

/// Holds the count of a single letter within a word
pub type CountType = u32;

/// A lowercase ASCII word, as produced by the tokenizer
pub type Word = String;

///The anagram signature: a bag-of-letters representation where each slot
///holds the number of times a letter (a-z) occurs.
///
///Signatures are ordered lexicographically over the counts of `a` to `z`,
///the first slot that differs decides the order.
#[derive(Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Default)]
pub struct Signature([CountType; ALPHABET_SIZE]);

impl Signature {
    /// The signature of the empty word
    pub fn empty() -> Self {
        Signature([0; ALPHABET_SIZE])
    }

    pub fn from_counts(counts: [CountType; ALPHABET_SIZE]) -> Self {
        Signature(counts)
    }

    pub fn counts(&self) -> &[CountType; ALPHABET_SIZE] {
        &self.0
    }

    /// Returns the count for a letter, letters outside a-z always count 0
    pub fn count(&self, letter: u8) -> CountType {
        if letter.is_ascii_lowercase() {
            self.0[(letter - b'a') as usize]
        } else {
            0
        }
    }

    /// Adds one occurrence of the letter, anything outside a-z is ignored. Counts saturate at their maximum.
    pub fn add(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            let slot = &mut self.0[(letter - b'a') as usize];
            *slot = slot.saturating_add(1);
        }
    }

    /// Number of letters in the signature, equals the length of the words it represents
    pub fn len(&self) -> usize {
        self.0.iter().map(|count| *count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|count| *count == 0)
    }
}

///Renders the letters of the signature in alphabetical order, `listen` becomes `eilnst`
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, count) in self.0.iter().enumerate() {
            let letter = (b'a' + i as u8) as char;
            for _ in 0..*count {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self)
    }
}
