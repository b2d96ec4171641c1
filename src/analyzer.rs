//! Frequency analysis engine
//!
//! Counts occurrences of wanted characters in a phrase and groups them by the
//! combination of wanted characters found in each word and by the word length
//! (special characters excluded).

use crate::charset::CharacterSet;

use ahash::RandomState;
use hashbrown::HashMap;
use std::collections::BTreeSet;
use std::fmt;

/// Characters ignored when measuring word length (ASCII punctuation and space)
pub const DEFAULT_SPECIAL_CHARACTERS: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters whose frequency is analyzed
pub const DEFAULT_WANTED_CHARACTERS: &str = "LOGIC";

/// Word separator used by the grouping pass
const WORD_SEPARATOR: char = ' ';

/// Group identity: distinct wanted characters of a word plus its length
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    chars: BTreeSet<char>,
    length: usize,
}

impl GroupKey {
    pub fn new(chars: impl IntoIterator<Item = char>, length: usize) -> Self {
        Self {
            chars: chars.into_iter().collect(),
            length,
        }
    }

    /// Distinct wanted characters, in ascending order
    pub fn chars(&self) -> &BTreeSet<char> {
        &self.chars
    }

    /// Word length without special characters
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("({")?;
        for (i, c) in self.chars.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", c)?;
        }
        write!(f, "}}, {})", self.length)
    }
}

/// Result of analyzing a single phrase
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    groups: Vec<(GroupKey, u64)>,
    wanted_count: u64,
    allowed_count: u64,
}

impl Report {
    /// Groups sorted ascending by tally
    pub fn groups(&self) -> &[(GroupKey, u64)] {
        &self.groups
    }

    /// Wanted-character occurrences across the whole phrase
    pub fn wanted_count(&self) -> u64 {
        self.wanted_count
    }

    /// Non-special character occurrences across the whole phrase
    pub fn allowed_count(&self) -> u64 {
        self.allowed_count
    }

    /// Share of all wanted characters attributed to one group
    pub fn group_ratio(&self, tally: u64) -> f64 {
        ratio(tally, self.wanted_count)
    }

    /// Share of wanted characters among all non-special characters
    pub fn total_ratio(&self) -> f64 {
        ratio(self.wanted_count, self.allowed_count)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, tally) in &self.groups {
            writeln!(
                f,
                "{} = {} ({}/{})",
                key,
                format_ratio(self.group_ratio(*tally)),
                tally,
                self.wanted_count
            )?;
        }
        writeln!(
            f,
            "TOTAL Frequency: {} ({}/{})",
            format_ratio(self.total_ratio()),
            self.wanted_count,
            self.allowed_count
        )
    }
}

/// Zero denominators yield 0.0
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Round half-up to two decimals, keeping at least one fractional digit
pub fn format_ratio(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Wanted-character frequency analyzer
///
/// Both character sets are fixed at construction, so one analyzer can be
/// shared freely between callers.
#[derive(Debug, Clone)]
pub struct FrequencyAnalyzer {
    special: CharacterSet,
    wanted: CharacterSet,
}

impl FrequencyAnalyzer {
    /// Create an analyzer from the special and wanted alphabets
    ///
    /// The two sets are independent: a character present in both is still
    /// detected as wanted inside a word.
    pub fn new(special: &str, wanted: &str) -> Self {
        Self {
            special: CharacterSet::new(special),
            wanted: CharacterSet::new(wanted),
        }
    }

    pub fn special(&self) -> &CharacterSet {
        &self.special
    }

    pub fn wanted(&self) -> &CharacterSet {
        &self.wanted
    }

    /// Analyze a phrase and render the report
    pub fn analyze(&self, phrase: &str) -> String {
        self.report(phrase).to_string()
    }

    /// Analyze a phrase
    pub fn report(&self, phrase: &str) -> Report {
        let phrase = phrase.to_lowercase();

        let (wanted_count, allowed_count) = self.count_totals(&phrase);
        let tally = self.group_words(&phrase);

        let mut groups: Vec<_> = tally.into_iter().collect();
        groups.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        log::debug!(
            "Analyzed {} chars: {} groups, {} wanted / {} allowed",
            phrase.chars().count(),
            groups.len(),
            wanted_count,
            allowed_count
        );

        Report {
            groups,
            wanted_count,
            allowed_count,
        }
    }

    /// Count (wanted, allowed) characters over the whole folded phrase
    fn count_totals(&self, phrase: &str) -> (u64, u64) {
        let mut wanted = 0;
        let mut allowed = 0;

        for c in phrase.chars() {
            if self.special.contains(c) {
                continue;
            }
            allowed += 1;
            if self.wanted.contains(c) {
                wanted += 1;
            }
        }

        (wanted, allowed)
    }

    /// Accumulate wanted-character occurrences per group
    fn group_words(&self, phrase: &str) -> HashMap<GroupKey, u64, RandomState> {
        let mut groups = HashMap::with_hasher(RandomState::new());

        for word in phrase.split(WORD_SEPARATOR) {
            let mut combination = BTreeSet::new();
            let mut char_count = 0u64;

            for c in word.chars() {
                if self.wanted.contains(c) {
                    combination.insert(c);
                    char_count += 1;
                }
            }

            if combination.is_empty() {
                continue;
            }

            let length = self.special.count_outside(word);
            log::trace!("word {:?}: {} wanted chars, length {}", word, char_count, length);

            let key = GroupKey {
                chars: combination,
                length,
            };
            *groups.entry(key).or_insert(0) += char_count;
        }

        groups
    }
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIAL_CHARACTERS, DEFAULT_WANTED_CHARACTERS)
    }
}
