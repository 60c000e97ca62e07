//! Command-line interface definition for wordlist-gen
//!
//! Provides argument parsing and validation for the wordlist generator.

use crate::error::{GenError, Result};

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Permutation wordlist generator for penetration testing
///
/// Writes every ordering of every subset of a charset, one word per line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-gen",
    author = "m0h1nd4",
    version,
    about = "Generate a wordlist from every permutation of every subset of a charset",
    long_about = r#"
╔══════════════════════════════════════════════════════════════╗
║                    WORDLIST-GEN v1.0.0                       ║
║        Permutation Wordlist Generator For Penetration Testing║
╚══════════════════════════════════════════════════════════════╝

Reads a charset (one character or word per line) and writes every
permutation of every subset of it, shortest subsets first. A charset of
N tokens yields the sum of N!/(N-k)! words for k = 0..N: 10 tokens already
give 9,864,101 words, so keep charsets small.

EXAMPLES:
    # Charset from a file, wordlist to a file (progress bar on stderr)
    wordlist-gen -c charset.txt -o wordlist.txt

    # Charset from stdin, wordlist to stdout
    printf 'a\nb\nc\n' | wordlist-gen > wordlist.txt

    # Passphrases: trim charset lines and add a space token
    wordlist-gen -c words.txt --trim --add-space -o phrases.txt

    # Only report how many words would be generated
    wordlist-gen -c charset.txt --dry-run

EXIT CODES:
    0  success
    1  charset or output could not be opened
    2  interrupted with ^C
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/wordlist-gen"
)]
pub struct Args {
    /// Characters or words to permute, one per line (default: stdin)
    #[arg(short, long, value_name = "CHARSET_FILE")]
    pub charset: Option<PathBuf>,

    /// Wordlist output file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Append a space token to the charset unless it already has one
    #[arg(long, default_value_t = false)]
    pub add_space: bool,

    /// Trim all surrounding whitespace from charset lines
    #[arg(long, default_value_t = false)]
    pub trim: bool,

    /// Charset encoding label, e.g. "latin1" (default: auto-detect)
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Buffer size for output writing
    #[arg(long, value_name = "SIZE", default_value = "1MB")]
    pub buffer_size: String,

    /// When to draw the progress bar
    #[arg(long, value_enum, default_value_t = ProgressMode::Auto)]
    pub progress: ProgressMode,

    /// Dry run - load the charset and report the word count without writing
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Progress bar policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgressMode {
    /// Only when not quiet, stderr is a terminal and words are not written to that terminal
    Auto,
    /// Always draw the bar on stderr
    Always,
    /// Never draw the bar
    Never,
}

impl ProgressMode {
    /// Decide whether the bar is drawn for this run
    pub fn enabled(
        self,
        quiet: bool,
        output_is_stdout: bool,
        stdout_is_tty: bool,
        stderr_is_tty: bool,
    ) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !quiet && stderr_is_tty && !(output_is_stdout && stdout_is_tty),
        }
    }
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> Result<usize> {
        parse_size(&self.buffer_size)
    }
}

/// Parse human-readable size string to bytes
pub fn parse_size(size_str: &str) -> Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = size_str.strip_suffix("GB") {
        (num, 1024 * 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("MB") {
        (num, 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("KB") {
        (num, 1024)
    } else if let Some(num) = size_str.strip_suffix('B') {
        (num, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| GenError::InvalidSize(size_str.clone()))?;

    num.checked_mul(multiplier)
        .filter(|&bytes| bytes > 0)
        .ok_or_else(|| GenError::InvalidSize(size_str.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["wordlist-gen"]);
        assert!(args.charset.is_none());
        assert!(args.output.is_none());
        assert!(!args.add_space);
        assert!(!args.trim);
        assert_eq!(args.progress, ProgressMode::Auto);
        assert_eq!(args.parse_buffer_size().unwrap(), 1024 * 1024);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["wordlist-gen", "-c", "chars.txt", "-o", "out.txt", "-q"]);
        assert_eq!(args.charset, Some(PathBuf::from("chars.txt")));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.quiet);
    }

    #[test]
    fn test_progress_mode_values() {
        let args = Args::parse_from([
            "wordlist-gen",
            "--progress",
            "never",
            "--add-space",
            "--trim",
        ]);
        assert_eq!(args.progress, ProgressMode::Never);
        assert!(args.add_space);
        assert!(args.trim);
    }

    #[test]
    fn test_progress_auto() {
        // writing to a file, watching on a terminal
        assert!(ProgressMode::Auto.enabled(false, false, true, true));
        // piping stdout elsewhere
        assert!(ProgressMode::Auto.enabled(false, true, false, true));
        // words scroll on the same terminal
        assert!(!ProgressMode::Auto.enabled(false, true, true, true));
        // stderr redirected
        assert!(!ProgressMode::Auto.enabled(false, false, false, false));

        assert!(ProgressMode::Always.enabled(false, true, true, false));
        assert!(!ProgressMode::Never.enabled(false, false, false, true));
    }

    #[test]
    fn test_progress_quiet() {
        // -q hides the bar even when writing to a file from a terminal
        assert!(!ProgressMode::Auto.enabled(true, false, true, true));
        assert!(ProgressMode::Always.enabled(true, false, true, true));
        assert!(!ProgressMode::Never.enabled(true, false, true, true));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64MB").unwrap(), 64 * 1024 * 1024);
        assert_eq!(parse_size("128kb").unwrap(), 128 * 1024);
        assert_eq!(parse_size("4096").unwrap(), 4096);
        assert_eq!(parse_size("512B").unwrap(), 512);
        assert!(matches!(parse_size("lots"), Err(GenError::InvalidSize(_))));
        assert!(matches!(parse_size("0MB"), Err(GenError::InvalidSize(_))));
    }
}
