//! Groups the words of a text corpus into anagram classes.
//!
//! Text is split into lowercase ASCII words by [`Words`], each word is
//! reduced to its letter-count [`Signature`], and an [`AnagramIndex`] keeps
//! one [`Group`] of distinct words per signature. A [`Reporter`] writes out
//! every group with more than one member, in signature order.

extern crate log;
extern crate serde;
extern crate serde_json;
extern crate thiserror;

use std::io::{Read, Write};

pub mod types;
pub mod error;
pub mod signature;
pub mod tokenizer;
pub mod group;
pub mod index;
pub mod report;
pub mod test;

pub use crate::types::*;
pub use crate::error::*;
pub use crate::signature::*;
pub use crate::tokenizer::*;
pub use crate::group::*;
pub use crate::index::*;
pub use crate::report::*;

///Reads all words from the source, groups them and writes the report.
///Returns the number of groups written.
pub fn process<R: Read>(words: Words<R>, params: ReportParameters, writer: &mut impl Write) -> Result<usize> {
    let mut index = AnagramIndex::new();
    index.extend_from_words(words);
    Reporter::new(params).report(&index, writer)
}
