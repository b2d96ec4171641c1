//! Core processing pipeline
//!
//! Reads the phrase, runs the analyzer and writes the report.

use crate::analyzer::FrequencyAnalyzer;
use crate::cli::Args;
use crate::encoding::{read_phrase, read_phrase_file};
use crate::output::{ensure_parent_dir, ReportTarget};
use crate::progress::{print_header, print_info, print_success, print_warning, RunStats};

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub special: String,
    pub wanted: String,
    pub quiet: bool,
    pub verbose: bool,
    pub stats: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        args.validate()?;

        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            special: args.special.clone(),
            wanted: args.wanted.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            stats: args.stats,
        })
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    analyzer: FrequencyAnalyzer,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        let analyzer = FrequencyAnalyzer::new(&config.special, &config.wanted);
        Self { config, analyzer }
    }

    pub fn analyzer(&self) -> &FrequencyAnalyzer {
        &self.analyzer
    }

    /// Read the phrase, analyze it and write the report
    pub fn process(&self) -> anyhow::Result<()> {
        let mut stats = RunStats::new();

        let phrase = self.read_input()?;
        stats.phrase_chars = phrase.chars().count() as u64;

        if phrase.is_empty() && !self.config.quiet {
            print_warning("Empty phrase, nothing to analyze");
        }

        let report = self.analyzer.report(&phrase);
        let rendered = report.to_string();

        let target = ReportTarget::from_path(self.config.output.as_deref());
        if let ReportTarget::File(ref path) = target {
            ensure_parent_dir(path)?;
        }

        if !self.config.quiet {
            print_header("Report");
        }
        stats.written = target.write_report(&rendered)?;
        log::debug!("Wrote {} report lines to {}", stats.written.lines, target.describe());

        if !self.config.quiet {
            if let ReportTarget::File(_) = target {
                print_success(&format!("Report written to: {}", target.describe()));
            }
        }

        if self.config.stats {
            stats.print_summary(&report);
        }

        Ok(())
    }

    /// Acquire the phrase from the input file or stdin
    fn read_input(&self) -> anyhow::Result<String> {
        match self.config.input {
            Some(ref path) => {
                if !self.config.quiet {
                    print_info(&format!("Input: {:?}", path));
                }
                Ok(read_phrase_file(path)?)
            }
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() && !self.config.quiet {
                    eprint!("Enter phrase: ");
                    io::stderr().flush()?;
                }
                Ok(read_phrase(stdin.lock())?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    fn config(input: PathBuf, output: PathBuf) -> ProcessorConfig {
        ProcessorConfig {
            input: Some(input),
            output: Some(output),
            special: " .,!".to_string(),
            wanted: "LOGIC".to_string(),
            quiet: true,
            verbose: false,
            stats: false,
        }
    }

    #[test]
    fn test_file_to_file() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "Logic, lol!").unwrap();
        writeln!(input, "this line is never read").unwrap();

        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.txt");

        Processor::new(config(input.path().to_path_buf(), output.clone()))
            .process()
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "({'l', 'o'}, 3) = 0.38 (3/8)\n\
             ({'c', 'g', 'i', 'l', 'o'}, 5) = 0.63 (5/8)\n\
             TOTAL Frequency: 1.0 (8/8)\n"
        );
    }

    #[test]
    fn test_output_dir_created() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "logic").unwrap();

        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("reports").join("logic.txt");

        Processor::new(config(input.path().to_path_buf(), output.clone()))
            .process()
            .unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_cr_line_endings_file() {
        let mut input = NamedTempFile::new().unwrap();
        input.write_all(b"logic\rworld\r").unwrap();

        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.txt");

        Processor::new(config(input.path().to_path_buf(), output.clone()))
            .process()
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "({'c', 'g', 'i', 'l', 'o'}, 5) = 1.0 (5/5)\nTOTAL Frequency: 1.0 (5/5)\n"
        );
    }

    #[test]
    fn test_empty_input_file() {
        let input = NamedTempFile::new().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.txt");

        Processor::new(config(input.path().to_path_buf(), output.clone()))
            .process()
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "TOTAL Frequency: 0.0 (0/0)\n"
        );
    }

    #[test]
    fn test_missing_input_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = config(
            temp_dir.path().join("nope.txt"),
            temp_dir.path().join("report.txt"),
        );

        assert!(Processor::new(cfg).process().is_err());
    }

    #[test]
    fn test_config_from_args() {
        let args = Args {
            input: Some(PathBuf::from("in.txt")),
            output: None,
            special: " ".to_string(),
            wanted: "abc".to_string(),
            stats: true,
            quiet: false,
            verbose: true,
        };

        let config = ProcessorConfig::from_args(&args).unwrap();
        assert_eq!(config.wanted, "abc");
        assert!(config.stats);

        let processor = Processor::new(config);
        assert_eq!(processor.analyzer().wanted().sorted(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_config_rejects_empty_wanted() {
        let args = Args {
            input: None,
            output: None,
            special: " ".to_string(),
            wanted: String::new(),
            stats: false,
            quiet: true,
            verbose: false,
        };

        assert!(ProcessorConfig::from_args(&args).is_err());
    }
}
