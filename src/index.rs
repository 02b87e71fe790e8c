use std::io::Read;
use std::iter::FromIterator;
use std::path::Path;

use log::{debug, info};

use crate::error::*;
use crate::group::*;
use crate::signature::*;
use crate::tokenizer::*;
use crate::types::*;

type NodeId = usize;

///A node in the index, binds one signature to its group
#[derive(Debug)]
struct IndexNode {
    signature: Signature,
    group: Group,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

///The anagram index: a binary search tree keyed by signature, mapping
///each signature to the group of distinct words that have it.
///
///Nodes live in a single arena and link to their children by position,
///nodes are never removed. The shape of the tree depends on insertion order,
///the order of [`AnagramIndex::groups()`] never does.
///
/// # Examples
///
/// ```
/// # use anagrammer::*;
/// let mut index = AnagramIndex::new();
/// index.insert("listen");
/// index.insert("silent");
/// index.insert("tin");
/// let anagrams: Vec<&[Word]> = index.anagrams().map(|(_, group)| group.words()).collect();
/// assert_eq!(anagrams, vec![&["listen".to_string(), "silent".to_string()][..]]);
/// ```
#[derive(Debug,Default)]
pub struct AnagramIndex {
    nodes: Vec<IndexNode>,
    root: Option<NodeId>,
    word_count: usize,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    ///Builds an index from all words in the file at `path`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut index = Self::new();
        index.read_file(path)?;
        Ok(index)
    }

    ///Reads all words from the file at `path` into the index, returns the number of tokens read
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        info!("Reading corpus from {}...", path.display());
        let words = Words::open(path)?;
        Ok(self.extend_from_words(words))
    }

    ///Feeds every word of the tokenizer into the index, returns the number of tokens read
    pub fn extend_from_words<R: Read>(&mut self, mut words: Words<R>) -> usize {
        let mut tokens = 0;
        while words.advance() {
            if let Some(word) = words.current() {
                self.insert(word);
                tokens += 1;
            }
        }
        info!(" - Read {} tokens, {} distinct words", tokens, self.word_count);
        info!(" - Found {} signatures", self.nodes.len());
        tokens
    }

    ///Adds a word to the index. Returns true if the word was not in the index yet.
    ///Empty strings and anything that is not a lowercase ASCII word are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if !word.is_word() {
            debug!("   (ignoring {:?}, not a lowercase ascii word)", word);
            return false;
        }
        let signature = word.signature();
        let id = match self.find(&signature) {
            Ok(id) => id,
            Err(parent) => self.attach(signature, parent),
        };
        let added = self.nodes[id].group.insert(word);
        if added {
            self.word_count += 1;
        }
        added
    }

    ///Searches for the node with this signature, the search stops at the first node with an
    ///equal signature. If there is none, returns the node to attach a new child to
    ///(`None` for an empty tree).
    fn find(&self, signature: &Signature) -> std::result::Result<NodeId, Option<NodeId>> {
        let mut parent = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            if *signature == node.signature {
                return Ok(id);
            }
            parent = Some(id);
            current = if *signature < node.signature {
                node.left
            } else {
                node.right
            };
        }
        Err(parent)
    }

    fn attach(&mut self, signature: Signature, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        debug!("   (new signature {} as node {})", signature, id);
        self.nodes.push(IndexNode {
            signature,
            group: Group::new(),
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if signature < parent.signature {
                    parent.left = Some(id);
                } else {
                    parent.right = Some(id);
                }
            }
        }
        id
    }

    ///Get the group of words sharing the signature of this word (whether the word itself was
    ///added or not)
    pub fn get(&self, word: &str) -> Option<&Group> {
        self.find(&word.signature())
            .ok()
            .map(|id| &self.nodes[id].group)
    }

    ///Tests if the index has this exact word
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).map_or(false, |group| group.contains(word))
    }

    ///Number of distinct signatures (nodes) in the index
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    ///Number of distinct words in the index
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    ///Height of the tree, 0 for an empty index
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.into_iter().map(|id| (id, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.iter().chain(node.right.iter()).map(|child| (*child, depth + 1)));
        }
        max
    }

    ///Iterates over all groups, singletons included, in ascending signature order
    pub fn groups(&self) -> GroupIterator<'_> {
        GroupIterator::new(self)
    }

    ///Iterates over all groups with at least two words, in ascending signature order
    pub fn anagrams(&self) -> impl Iterator<Item = (&Signature, &Group)> {
        self.groups().filter(|(_, group)| group.is_anagram_group())
    }
}

impl<S: AsRef<str>> Extend<S> for AnagramIndex {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for AnagramIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut index = AnagramIndex::new();
        index.extend(iter);
        index
    }
}

/// In-order traversal over the index. Uses an explicit stack rather
/// than recursion, a corpus fed in sorted order degenerates the tree
/// into a list as deep as the number of signatures.
pub struct GroupIterator<'a> {
    index: &'a AnagramIndex,
    stack: Vec<NodeId>,
}

impl<'a> GroupIterator<'a> {
    fn new(index: &'a AnagramIndex) -> Self {
        let mut iter = GroupIterator {
            index,
            stack: Vec::new(),
        };
        iter.push_left(index.root);
        iter
    }

    fn push_left(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.index.nodes[id].left;
        }
    }
}

impl<'a> Iterator for GroupIterator<'a> {
    type Item = (&'a Signature, &'a Group);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let index = self.index;
        let node = &index.nodes[id];
        self.push_left(node.right);
        Some((&node.signature, &node.group))
    }
}
