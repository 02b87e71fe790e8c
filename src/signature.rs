use crate::types::*;

///Trait for objects that have an anagram signature (string-like)
pub trait Anagrammable {
    fn signature(&self) -> Signature;
    fn is_word(&self) -> bool;
}

impl Anagrammable for str {
    ///Compute the anagram signature for a given word
    ///
    /// # Examples
    ///
    /// ```
    /// # use anagrammer::*;
    /// assert_eq!("listen".signature(), "silent".signature());
    /// assert_ne!("listen".signature(), "tin".signature());
    /// ```
    fn signature(&self) -> Signature {
        let mut signature = Signature::empty();
        for byte in self.bytes() {
            signature.add(byte);
        }
        signature
    }

    ///Tests whether this is a valid word: non-empty and lowercase ASCII letters only
    fn is_word(&self) -> bool {
        !self.is_empty() && self.bytes().all(|byte| byte.is_ascii_lowercase())
    }
}
