use hashbrown::HashMap;
use log::debug;

use crate::key::canonical_key;

/// Anagram lookup table: canonical key to every word sharing it, in the
/// order the words were supplied.
///
/// Built once and only read afterwards, so a single index can be shared by
/// reference across any number of solves.
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    buckets: HashMap<String, Vec<String>>,
    word_count: usize,
}

impl AnagramIndex {
    /// Index `words`. They should already be folded to the case the caller
    /// wants reported back, since buckets store the words verbatim.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
        let mut word_count = 0;
        for word in words {
            let word = word.into();
            buckets.entry(canonical_key(&word)).or_default().push(word);
            word_count += 1;
        }
        debug!(
            "indexed {} words under {} letter combinations",
            word_count,
            buckets.len()
        );
        AnagramIndex {
            buckets,
            word_count,
        }
    }

    /// Words whose canonical key is exactly `key`; empty when there are none.
    pub fn lookup_key(&self, key: &str) -> &[String] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct letter combinations.
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
