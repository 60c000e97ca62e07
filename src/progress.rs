//! Progress display module
//!
//! Styled status lines, the generation progress bar and the final summary.
//! Everything here writes to stderr; stdout may be carrying the wordlist.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║   WORDLIST-GEN  ·  every ordering of every subset            ║
║   Permutation Wordlist Generator For Penetration Testing     ║
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

/// Create a word-count progress bar, or a spinner when the total is unknown
pub fn create_progress_bar(total: Option<u64>, msg: &str) -> ProgressBar {
    let pb = match total {
        Some(total) => {
            let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {human_pos}/{human_len} words ({percent}%, {per_sec}, eta {eta}) {msg}")
                    .unwrap()
                    .progress_chars("█▓░"),
            );
            pb
        }
        None => {
            let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {human_pos} words ({per_sec}) {msg}")
                    .unwrap()
                    .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
            );
            pb
        }
    };

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Statistics for one generation run
#[derive(Debug)]
pub struct GenerationStats {
    pub charset_size: usize,
    pub expected_words: Option<u128>,
    pub words_written: u64,
    pub bytes_written: u64,
    pub start_time: Instant,
}

impl GenerationStats {
    pub fn new(charset_size: usize, expected_words: Option<u128>) -> Self {
        Self {
            charset_size,
            expected_words,
            words_written: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn words_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.words_written as f64 / elapsed
        } else {
            0.0
        }
    }

    /// True once every expected word has been written
    pub fn is_complete(&self) -> bool {
        self.expected_words == Some(self.words_written as u128)
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        let expected = format_total(self.expected_words);

        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                   GENERATION COMPLETE".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {}", "Charset tokens: ".green(), self.charset_size);
        eprintln!("  {} {}", "Expected words: ".green(), expected);
        eprintln!(
            "  {} {}",
            "Words written:  ".green().bold(),
            format_number(self.words_written).green().bold()
        );
        eprintln!("  {} {}", "Data written:   ".green(), ByteSize(self.bytes_written));

        eprintln!();
        eprintln!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        eprintln!("  {} {:.2} words/sec", "Throughput:     ".green(), self.words_per_second());
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    format_count(n as u128)
}

fn format_count(n: u128) -> String {
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

/// Format an exact word total, which may exceed u64
pub fn format_total(total: Option<u128>) -> String {
    total.map(format_count).unwrap_or_else(|| "more than u128::MAX".to_string())
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(Some(9_864_101)), "9,864,101");
        assert_eq!(format_total(None), "more than u128::MAX");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_stats_completion() {
        let mut stats = GenerationStats::new(2, Some(5));
        assert!(!stats.is_complete());

        stats.words_written = 5;
        stats.bytes_written = 10;
        assert!(stats.is_complete());
    }
}
