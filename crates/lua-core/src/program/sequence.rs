//! Instruction sequence
//!
//! Ordered, caller-owned list of words. Order is application order on the
//! hardware; the sequence never reorders, deduplicates or validates.

use crate::bytecode::word::{InstructionWord, WORD_SIZE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionSequence {
    words: Vec<InstructionWord>,
}

impl InstructionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        InstructionSequence {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Append a word after everything already in the sequence
    pub fn push(&mut self, word: InstructionWord) {
        self.words.push(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[InstructionWord] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstructionWord> {
        self.words.iter()
    }

    /// Size of the serialized image in bytes
    pub fn byte_len(&self) -> usize {
        self.words.len() * WORD_SIZE
    }

    /// Flat little-endian concatenation of every word, no header or trailer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.byte_len());
        for word in &self.words {
            buf.extend_from_slice(&word.to_le_bytes());
        }
        buf
    }
}

impl Extend<InstructionWord> for InstructionSequence {
    fn extend<I: IntoIterator<Item = InstructionWord>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl FromIterator<InstructionWord> for InstructionSequence {
    fn from_iter<I: IntoIterator<Item = InstructionWord>>(iter: I) -> Self {
        InstructionSequence {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InstructionSequence {
    type Item = &'a InstructionWord;
    type IntoIter = std::slice::Iter<'a, InstructionWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for InstructionSequence {
    type Item = InstructionWord;
    type IntoIter = std::vec::IntoIter<InstructionWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
