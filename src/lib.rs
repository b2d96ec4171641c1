//! # Letter Frequency
//!
//! Frequency analysis of "wanted" characters in a phrase.
//!
//! ## Features
//!
//! - **Grouping**: occurrences are bucketed by the set of wanted characters
//!   found in each word and by the word length
//! - **Special characters**: punctuation and whitespace are left out of word
//!   lengths and totals
//! - **Case-insensitive**: phrase and alphabets are lowercased first
//! - **Encoding detection**: input files are transcoded to UTF-8
//!
//! ## Usage
//!
//! ```bash
//! # Type a phrase on the terminal
//! letter-frequency
//!
//! # Analyze the first line of a file and write the report to another file
//! letter-frequency phrase.txt report.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use letter_frequency::FrequencyAnalyzer;
//!
//! let analyzer = FrequencyAnalyzer::default();
//! let report = analyzer.analyze("Hello Logic World");
//!
//! assert!(report.ends_with("TOTAL Frequency: 0.67 (10/15)\n"));
//! ```

pub mod analyzer;
pub mod charset;
pub mod cli;
pub mod encoding;
pub mod error;
pub mod output;
pub mod processor;
pub mod progress;

pub use analyzer::{FrequencyAnalyzer, GroupKey, Report};
pub use charset::CharacterSet;
pub use cli::Args;
pub use error::FrequencyError;
pub use processor::{Processor, ProcessorConfig};
