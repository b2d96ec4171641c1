//! Character set module
//!
//! Case-folded sets of characters used to classify the characters of a phrase.

use ahash::RandomState;
use hashbrown::HashSet;
use std::fmt;

/// Set of lowercased characters
#[derive(Clone)]
pub struct CharacterSet {
    chars: HashSet<char, RandomState>,
}

impl CharacterSet {
    /// Build a set from an alphabet string
    ///
    /// The alphabet is lowercased first, then split into characters.
    /// Duplicates collapse; whitespace and punctuation are kept as members.
    pub fn new(alphabet: &str) -> Self {
        let mut chars = HashSet::with_hasher(RandomState::new());
        chars.extend(alphabet.to_lowercase().chars());
        Self { chars }
    }

    /// Check whether a (lowercased) character belongs to the set
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Count the characters of `text` that are NOT in the set
    #[inline]
    pub fn count_outside(&self, text: &str) -> usize {
        text.chars().filter(|&c| !self.contains(c)).count()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Members in ascending order
    pub fn sorted(&self) -> Vec<char> {
        let mut v: Vec<_> = self.chars.iter().copied().collect();
        v.sort_unstable();
        v
    }
}

impl fmt::Debug for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.sorted()).finish()
    }
}

impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for CharacterSet {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        let set = CharacterSet::new("LOGIC");

        assert!(set.contains('l'));
        assert!(set.contains('c'));
        assert!(!set.contains('L')); // lookups expect folded input
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = CharacterSet::new("aAbBaa");
        assert_eq!(set.sorted(), vec!['a', 'b']);
    }

    #[test]
    fn test_whitespace_is_member() {
        let set = CharacterSet::new(" .,");

        assert!(set.contains(' '));
        assert!(set.contains('.'));
        assert_eq!(set.count_outside("a, b."), 2);
    }

    #[test]
    fn test_empty_alphabet() {
        let set = CharacterSet::new("");

        assert!(set.is_empty());
        assert_eq!(set.count_outside("hello"), 5);
    }

    #[test]
    fn test_unicode_members() {
        let set = CharacterSet::new("ÄÖ");

        assert!(set.contains('ä'));
        assert!(set.contains('ö'));
        assert_eq!(set.count_outside("hällö"), 3);
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(CharacterSet::new("abc"), CharacterSet::new("CBA"));
    }
}
