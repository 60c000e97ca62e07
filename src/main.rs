//! Wordlist Gen - Permutation wordlist generator for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_gen::cli::Args;
use wordlist_gen::error::{GenError, EXIT_OPEN_FAILURE};
use wordlist_gen::generator::{Generator, GeneratorConfig};
use wordlist_gen::interrupt::InterruptFlag;
use wordlist_gen::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        let code = e
            .downcast_ref::<GenError>()
            .map(GenError::exit_code)
            .unwrap_or(EXIT_OPEN_FAILURE);
        process::exit(code);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let config = GeneratorConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    let generator = Generator::new(config);

    // Reading stdin blocks until EOF, so ^C keeps its default behaviour until
    // the charset is in memory.
    let charset = generator.load_charset()?;
    let generator = generator.with_interrupt(InterruptFlag::install());

    generator.generate(&charset)?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &GeneratorConfig) {
    print_header("Configuration");

    let charset = config
        .charset_path
        .as_ref()
        .map(|p| format!("{:?}", p))
        .unwrap_or_else(|| "<stdin>".to_string());

    print_info(&format!("Charset:      {}", charset));
    print_info(&format!("Output:       {}", config.output_target()));
    print_info(&format!("Trim:         {:?}", config.trim));
    print_info(&format!("Add space:    {}", config.augment_with_space));
    print_info(&format!(
        "Encoding:     {}",
        config.encoding.map(|e| e.name()).unwrap_or("auto-detect")
    ));
    print_info(&format!("Buffer size:  {} KB", config.buffer_size / 1024));
    print_info(&format!("Progress:     {}", config.show_progress));
}
