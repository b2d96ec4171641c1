//! Command-line interface definition for letter-frequency
//!
//! Provides argument parsing and validation for the frequency analyzer.

use crate::analyzer::{DEFAULT_SPECIAL_CHARACTERS, DEFAULT_WANTED_CHARACTERS};

use clap::Parser;
use std::path::PathBuf;

/// Wanted-character frequency analysis
///
/// Reads one line of text, counts the wanted characters it contains and
/// groups them by character combination and word length.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "letter-frequency",
    author = "m0h1nd4",
    version,
    about = "Wanted-character frequency analysis grouped by word",
    long_about = r#"
Reads a single line of text and reports how often the wanted characters
occur. Occurrences are grouped by the set of wanted characters found in each
word together with the word length (special characters are not counted).

EXAMPLES:
    # Analyze a phrase typed on the terminal
    letter-frequency

    # Analyze the first line of a file, report to stdout
    letter-frequency phrase.txt

    # Analyze a file and write the report to another file
    letter-frequency phrase.txt report.txt

    # Look for vowels instead of the default alphabet
    letter-frequency --wanted aeiou phrase.txt

OUTPUT FORMAT:
    ({'l', 'o'}, 5) = 0.5 (5/10)
    TOTAL Frequency: 0.67 (10/15)
"#
)]
pub struct Args {
    /// File whose first line is the phrase (default: read one line from stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// File to write the report to (default: stdout)
    #[arg(value_name = "OUTPUT", requires = "input")]
    pub output: Option<PathBuf>,

    /// Characters ignored when measuring word length
    #[arg(short, long, value_name = "CHARS", default_value = DEFAULT_SPECIAL_CHARACTERS)]
    pub special: String,

    /// Characters whose frequency is analyzed
    #[arg(short, long, value_name = "CHARS", default_value = DEFAULT_WANTED_CHARACTERS)]
    pub wanted: String,

    /// Show a summary of the analysis
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Validate the alphabets
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.wanted.is_empty() {
            anyhow::bail!("The wanted alphabet must contain at least one character");
        }

        if let (Some(input), Some(output)) = (&self.input, &self.output) {
            if input == output {
                anyhow::bail!("Input and output must be different files: {:?}", input);
            }
        }

        Ok(())
    }
}
