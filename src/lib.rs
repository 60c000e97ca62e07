//! # Wordlist Gen
//!
//! Permutation wordlist generator for penetration testing.
//!
//! ## Features
//!
//! - **Exhaustive**: every ordering of every subset of a charset, shortest first
//! - **Words or characters**: each charset line is one token, concatenated as-is
//! - **Streaming**: words are produced lazily, memory stays proportional to the charset
//! - **Exact progress**: the total word count is known before generation starts
//! - **Encoding detection**: charset files in UTF-8, UTF-16 or legacy encodings
//!
//! ## Usage
//!
//! ```bash
//! # Charset file to wordlist file
//! wordlist-gen -c charset.txt -o wordlist.txt
//!
//! # Passphrases from whole words, with a space token
//! wordlist-gen -c words.txt --trim --add-space -o phrases.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordlist_gen::charset::CharsetLoader;
//! use wordlist_gen::enumerate::{total_words, words};
//!
//! let charset = CharsetLoader::new().parse("a\n\nb\n");
//! let all: Vec<String> = words(&charset).collect();
//!
//! assert_eq!(all, vec!["", "a", "b", "ab", "ba"]);
//! assert_eq!(total_words(charset.len()), Some(5));
//! ```

pub mod charset;
pub mod cli;
pub mod enumerate;
pub mod error;
pub mod generator;
pub mod interrupt;
pub mod output;
pub mod progress;

pub use charset::{Charset, CharsetLoader, TrimMode};
pub use cli::Args;
pub use error::GenError;
pub use generator::{Generator, GeneratorConfig};
