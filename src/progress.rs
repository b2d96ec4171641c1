//! Console display module
//!
//! Styled banner, status lines and the analysis summary. Everything here goes
//! to stderr so the report itself can be piped from stdout.

use crate::analyzer::{format_ratio, Report};
use crate::output::WriteSummary;

use bytesize::ByteSize;
use colored::*;
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║   ██╗     ███████╗████████╗████████╗███████╗██████╗          ║
║   ██║     ██╔════╝╚══██╔══╝╚══██╔══╝██╔════╝██╔══██╗         ║
║   ██║     █████╗     ██║      ██║   █████╗  ██████╔╝         ║
║   ██║     ██╔══╝     ██║      ██║   ██╔══╝  ██╔══██╗         ║
║   ███████╗███████╗   ██║      ██║   ███████╗██║  ██║         ║
║   ╚══════╝╚══════╝   ╚═╝      ╚═╝   ╚══════╝╚═╝  ╚═╝         ║
║                                                              ║
║              Wanted-Character Frequency Analysis             ║
║                                                  v1.0.0      ║
╚══════════════════════════════════════════════════════════════╝
"#;

    eprintln!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    eprintln!("  {} {}", "•".green(), text);
}

/// Statistics for a single analysis run
#[derive(Debug)]
pub struct RunStats {
    pub phrase_chars: u64,
    pub written: WriteSummary,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            phrase_chars: 0,
            written: WriteSummary::default(),
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self, report: &Report) {
        print_rule();
        eprintln!("{}", "                    ANALYSIS COMPLETE".green().bold());
        print_rule();
        eprintln!();

        eprintln!("  {} {}", "Phrase length:  ".green(), format_number(self.phrase_chars));
        eprintln!("  {} {}", "Allowed chars:  ".green(), format_number(report.allowed_count()));
        eprintln!("  {} {}", "Wanted chars:   ".green(), format_number(report.wanted_count()));
        eprintln!("  {} {}", "Groups:         ".green(), format_number(report.groups().len() as u64));
        eprintln!(
            "  {} {}",
            "Total frequency:".green().bold(),
            format_ratio(report.total_ratio()).green().bold()
        );

        if let Some((key, tally)) = report.groups().last() {
            eprintln!("  {} {} ({})", "Top group:      ".green(), key, tally);
        } else {
            eprintln!("  {} {}", "Top group:      ".yellow(), "none".yellow());
        }

        eprintln!();
        eprintln!("  {} {}", "Report lines:   ".green(), format_number(self.written.lines));
        eprintln!("  {} {}", "Report size:    ".green(), ByteSize(self.written.bytes));
        eprintln!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        eprintln!();
        print_rule();
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

fn print_rule() {
    eprintln!("{}", "═".repeat(60).green());
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs == 0 {
        format!("{}µs", duration.as_micros())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
