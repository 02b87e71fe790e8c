use std::io::Cursor;

use crate::index::*;
use crate::report::*;
use crate::tokenizer::*;

pub const SCENARIO_LISTEN: &str = "Listen Silent tin";

pub const SCENARIO_DUPLICATES: &str = "aa aa aa";

///A small corpus with several anagram classes, punctuation and mixed case
pub const CORPUS: &str = "Stressed? Desserts! The dormitory is a dirty room;
presents, SERPENTS and repents. Evil lives in a vile veil: live well.
tin nit";

pub fn get_test_words(text: &str) -> Words<Cursor<Vec<u8>>> {
    Words::new(Cursor::new(text.as_bytes().to_vec()))
}

pub fn get_test_index(text: &str) -> AnagramIndex {
    let mut index = AnagramIndex::new();
    index.extend_from_words(get_test_words(text));
    index
}

///Runs the full pipeline over the text and returns the written report
pub fn get_test_report(text: &str, params: ReportParameters) -> String {
    let index = get_test_index(text);
    let mut output: Vec<u8> = Vec::new();
    Reporter::new(params).report(&index, &mut output).expect("writing to a vec");
    String::from_utf8(output).expect("report is utf-8")
}
