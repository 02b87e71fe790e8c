use std::slice;

use crate::types::*;

///All distinct words that share one signature, in order of first insertion.
///Groups are expected to be small, membership is tested by a linear scan.
#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct Group {
    words: Vec<Word>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    ///Appends the word if it is not in the group yet. Returns true if it was added.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            false
        } else {
            self.words.push(word.to_owned());
            true
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    ///A group is only a true anagram group if it has at least two members
    pub fn is_anagram_group(&self) -> bool {
        self.words.len() > 1
    }

    pub fn first(&self) -> Option<&str> {
        self.words.first().map(|w| w.as_str())
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
