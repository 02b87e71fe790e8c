use std::io::{Read, Write};

use log::info;
use serde::Serialize;

use crate::error::*;
use crate::index::*;
use crate::tokenizer::*;
use crate::types::*;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum OutputFormat {
    /// One line per group, words separated by a single space
    Plain,

    /// One line per group: the signature, then all words, tab separated
    Signatures,

    /// A json array with one object per group
    Json,
}

#[derive(Clone,Debug)]
pub struct ReportParameters {
    pub format: OutputFormat,

    /// Groups with fewer words than this are not reported. The default of 2 reports only
    /// true anagram groups, 1 reports everything in the index.
    pub min_group_size: usize,
}

impl Default for ReportParameters {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            min_group_size: 2,
        }
    }
}

impl ReportParameters {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
    pub fn with_min_group_size(mut self, size: usize) -> Self {
        self.min_group_size = size.max(1);
        self
    }
}

#[derive(Serialize)]
struct GroupRecord<'a> {
    signature: String,
    words: &'a [Word],
}

///Writes the groups of an index, in signature order
pub struct Reporter {
    params: ReportParameters,
}

impl Reporter {
    pub fn new(params: ReportParameters) -> Self {
        Reporter { params }
    }

    ///Writes all groups that meet the minimum size, returns the number of groups written
    pub fn report(&self, index: &AnagramIndex, writer: &mut impl Write) -> Result<usize> {
        let min_group_size = self.params.min_group_size.max(1);
        let groups = index.groups().filter(|(_, group)| group.len() >= min_group_size);
        let mut count = 0;
        match self.params.format {
            OutputFormat::Plain => {
                for (_, group) in groups {
                    writeln!(writer, "{}", group.words().join(" "))?;
                    count += 1;
                }
            },
            OutputFormat::Signatures => {
                for (signature, group) in groups {
                    write!(writer, "{}", signature)?;
                    for word in group {
                        write!(writer, "\t{}", word)?;
                    }
                    writeln!(writer)?;
                    count += 1;
                }
            },
            OutputFormat::Json => {
                let records: Vec<GroupRecord> = groups
                    .map(|(signature, group)| GroupRecord {
                        signature: signature.to_string(),
                        words: group.words(),
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *writer, &records)?;
                writeln!(writer)?;
                count = records.len();
            }
        }
        writer.flush()?;
        info!("Reported {} groups", count);
        Ok(count)
    }
}

///Writes every token of the tokenizer, one per line in single quotes.
///Returns the number of tokens written.
pub fn write_tokens<R: Read>(words: Words<R>, writer: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    for word in words {
        writeln!(writer, "'{}'", word)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
