//! Charset loading module
//!
//! Reads the ordered list of tokens (single characters or whole words) that
//! generated words are built from. One token per line, blank lines skipped,
//! file order preserved. The source encoding is detected automatically.

use crate::error::{GenError, Result};

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// The token that `augment_with_space` guarantees
pub const SPACE_TOKEN: &str = " ";

/// Ordered, immutable sequence of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    tokens: Vec<String>,
}

impl Charset {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

impl<S: Into<String>> FromIterator<S> for Charset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Charset {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// How much of each charset line is stripped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrimMode {
    /// Strip line terminators only; leading/trailing spaces are part of the token
    #[default]
    LineEnding,
    /// Strip all surrounding whitespace
    Whitespace,
}

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of raw charset bytes
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    if let Some(encoding) = detect_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(content, true);
    let encoding = detector.guess(None, true);

    let confidence = if encoding == encoding_rs::UTF_8 {
        if std::str::from_utf8(content).is_ok() {
            1.0
        } else {
            0.5
        }
    } else {
        0.8
    };

    EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
    }
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    Encoding::for_bom(content).map(|(encoding, _)| encoding)
}

/// Resolve a user-supplied encoding label such as "latin1" or "utf-16le"
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| GenError::UnknownEncoding(label.to_string()))
}

/// Loads a [`Charset`] from a file, stdin or any reader
#[derive(Debug, Clone, Default)]
pub struct CharsetLoader {
    trim: TrimMode,
    augment_with_space: bool,
    encoding: Option<&'static Encoding>,
}

impl CharsetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    /// Guarantee a literal space token, appended last if the source lacks one.
    /// A space cannot be written as a line of its own once whitespace is trimmed.
    pub fn augment_with_space(mut self, augment: bool) -> Self {
        self.augment_with_space = augment;
        self
    }

    /// Skip detection and decode with this encoding
    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Load from a file path
    pub fn load_path(&self, path: &Path) -> Result<Charset> {
        let file = File::open(path).map_err(|source| GenError::OpenCharset {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading charset from {:?}", path);
        self.load_reader(file)
    }

    /// Load from standard input
    pub fn load_stdin(&self) -> Result<Charset> {
        log::debug!("Loading charset from stdin");
        self.load_reader(io::stdin().lock())
    }

    /// Rewind the source to its beginning, then load it
    pub fn load_seekable<R: Read + Seek>(&self, mut reader: R) -> Result<Charset> {
        reader.seek(SeekFrom::Start(0))?;
        self.load_reader(reader)
    }

    /// Load from any reader, consuming it to the end
    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<Charset> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let text = self.decode(&raw);
        Ok(self.parse(&text))
    }

    /// Split decoded text into tokens
    pub fn parse(&self, text: &str) -> Charset {
        let tokens: Vec<String> = text
            .split(['\r', '\n'])
            .map(|line| match self.trim {
                TrimMode::LineEnding => line,
                TrimMode::Whitespace => line.trim(),
            })
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        let mut charset = Charset::new(tokens);
        if self.augment_with_space && !charset.contains(SPACE_TOKEN) {
            charset.tokens.push(SPACE_TOKEN.to_string());
        }

        charset
    }

    fn decode(&self, raw: &[u8]) -> String {
        let encoding = match self.encoding {
            Some(encoding) => encoding,
            None => {
                let info = detect_encoding(raw);
                log::debug!("Charset encoding: {} (confidence {:.1})", info.name, info.confidence);
                info.encoding
            }
        };

        // decode() sniffs and removes a BOM
        let (decoded, used, had_errors) = encoding.decode(raw);
        if had_errors {
            log::warn!("Encoding errors in charset ({}), using lossy conversion", used.name());
        }
        decoded.into_owned()
    }
}
