//! Core generation engine
//!
//! Loads the charset, computes the expected word count, then streams every
//! word to the output while driving the progress bar.

use crate::charset::{encoding_for_label, Charset, CharsetLoader, TrimMode};
use crate::cli::Args;
use crate::enumerate::{total_words, words};
use crate::error::{GenError, Result};
use crate::interrupt::InterruptFlag;
use crate::output::{OutputTarget, OutputWriter, DEFAULT_BUFFER_SIZE};
use crate::progress::{
    create_progress_bar, format_total, print_header, print_info, print_success, print_warning,
    GenerationStats,
};

use bytesize::ByteSize;
use colored::*;
use encoding_rs::Encoding;
use indicatif::ProgressBar;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Words between progress bar updates
const PROGRESS_BATCH: u64 = 4096;

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub charset_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub trim: TrimMode,
    pub augment_with_space: bool,
    pub encoding: Option<&'static Encoding>,
    pub buffer_size: usize,
    pub show_progress: bool,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            charset_path: None,
            output_path: None,
            trim: TrimMode::LineEnding,
            augment_with_space: false,
            encoding: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
            show_progress: false,
            dry_run: false,
            quiet: true,
            verbose: false,
        }
    }
}

impl GeneratorConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let encoding = args.encoding.as_deref().map(encoding_for_label).transpose()?;
        let show_progress = args.progress.enabled(
            args.quiet,
            args.output.is_none(),
            io::stdout().is_terminal(),
            io::stderr().is_terminal(),
        );

        Ok(Self {
            charset_path: args.charset.clone(),
            output_path: args.output.clone(),
            trim: if args.trim {
                TrimMode::Whitespace
            } else {
                TrimMode::LineEnding
            },
            augment_with_space: args.add_space,
            encoding,
            buffer_size: args.parse_buffer_size()?,
            show_progress,
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    pub fn loader(&self) -> CharsetLoader {
        let loader = CharsetLoader::new()
            .trim(self.trim)
            .augment_with_space(self.augment_with_space);
        match self.encoding {
            Some(encoding) => loader.encoding(encoding),
            None => loader,
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from_path(self.output_path.as_deref())
    }
}

/// Main generator
pub struct Generator {
    config: GeneratorConfig,
    interrupt: InterruptFlag,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            interrupt: InterruptFlag::new(),
        }
    }

    /// Use a flag that is raised externally, e.g. by a Ctrl-C handler
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Load the charset from the configured file, or stdin
    pub fn load_charset(&self) -> Result<Charset> {
        let loader = self.config.loader();
        let charset = match &self.config.charset_path {
            Some(path) => loader.load_path(path)?,
            None => loader.load_stdin()?,
        };
        log::debug!("Loaded {} charset tokens", charset.len());
        Ok(charset)
    }

    /// Load the charset and generate the wordlist
    pub fn run(&self) -> Result<GenerationStats> {
        let charset = self.load_charset()?;
        self.generate(&charset)
    }

    /// Generate the wordlist for an already loaded charset
    pub fn generate(&self, charset: &Charset) -> Result<GenerationStats> {
        let total = total_words(charset.len());
        let mut stats = GenerationStats::new(charset.len(), total);
        let target = self.config.output_target();

        if !self.config.quiet {
            print_header("Charset loaded");
            print_info(&format!("Tokens:       {}", charset.len()));
            print_info(&format!("Words:        {}", format_total(total)));
            print_info(&format!("Output:       {}", target));
        }
        if self.config.verbose {
            for (i, token) in charset.iter().enumerate() {
                log::debug!("token[{}] = {:?}", i, token);
            }
        }

        if self.config.dry_run {
            if self.config.quiet {
                eprintln!("{} words from {} tokens", format_total(total), charset.len());
            } else {
                print_warning("DRY RUN - No words will be written");
            }
            return Ok(stats);
        }

        let mut output = OutputWriter::open(target, self.config.buffer_size)?;

        let pb = if self.config.show_progress {
            let len = total.and_then(|t| u64::try_from(t).ok());
            create_progress_bar(len, "Generating...")
        } else {
            ProgressBar::hidden()
        };

        let result = stream_words(words(charset), &mut output, &pb, &self.interrupt);
        stats.words_written = output.lines_written();
        stats.bytes_written = output.bytes_written();

        match &result {
            Ok(()) => pb.finish_with_message("Complete".green().to_string()),
            Err(GenError::Interrupted) => pb.abandon_with_message("Interrupted".red().to_string()),
            Err(_) => pb.abandon(),
        }
        result?;

        if !stats.is_complete() {
            log::debug!(
                "Stopped after {} of {} words (output closed)",
                stats.words_written,
                format_total(total)
            );
        }

        if !self.config.quiet {
            print_success(&format!(
                "Wordlist written to {} ({})",
                output.target(),
                ByteSize(stats.bytes_written)
            ));
            stats.print_summary();
        }

        Ok(stats)
    }
}

/// Write each word as one line, polling `interrupt` before every word.
///
/// On interrupt the buffered lines are flushed and `GenError::Interrupted` is
/// returned. A reader that closes the pipe ends the stream without error.
pub fn stream_words<I>(
    words: I,
    output: &mut OutputWriter,
    pb: &ProgressBar,
    interrupt: &InterruptFlag,
) -> Result<()>
where
    I: Iterator<Item = String>,
{
    let mut pending = 0u64;

    for word in words {
        if interrupt.is_raised() {
            pb.inc(pending);
            if let Err(e) = output.flush() {
                log::debug!("Flush after interrupt failed: {}", e);
            }
            return Err(GenError::Interrupted);
        }

        match output.write_line(&word) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("Output closed by reader");
                pb.inc(pending);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        pending += 1;
        if pending == PROGRESS_BATCH {
            pb.inc(pending);
            pending = 0;
        }
    }

    pb.inc(pending);
    match output.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(GenError::from),
    }
}
