//! Wordlist reading module
//!
//! Loads line-oriented word files with automatic encoding detection and
//! lossy transcoding to UTF-8. A wordlist read never fails on bad bytes,
//! only on a missing path.

use ahash::RandomState;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::WlistError;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of a file by sampling its content
pub fn detect_encoding(path: &Path) -> anyhow::Result<EncodingInfo> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    // First 64KB is enough of a sample
    let mut sample = vec![0u8; 64 * 1024];
    let bytes_read = reader.read(&mut sample)?;
    sample.truncate(bytes_read);

    if bytes_read == 0 {
        return Ok(EncodingInfo::default());
    }

    if let Some(encoding) = detect_bom(&sample) {
        return Ok(EncodingInfo {
            name: encoding.name(),
            encoding,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);
    let encoding = detector.guess(None, true);

    Ok(EncodingInfo {
        name: encoding.name(),
        encoding,
    })
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.len() >= 3 && content[0..3] == [0xEF, 0xBB, 0xBF] {
        return Some(encoding_rs::UTF_8);
    }
    if content.len() >= 2 {
        if content[0..2] == [0xFE, 0xFF] {
            return Some(encoding_rs::UTF_16BE);
        }
        if content[0..2] == [0xFF, 0xFE] {
            return Some(encoding_rs::UTF_16LE);
        }
    }
    None
}

/// A line iterator that handles different encodings
///
/// Undecodable byte sequences are replaced, never fatal.
pub struct EncodedLineIterator {
    reader: BufReader<File>,
    encoding: &'static Encoding,
    line_buffer: Vec<u8>,
}

impl EncodedLineIterator {
    /// Create a new line iterator for a file with automatic encoding detection
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let encoding_info = detect_encoding(path)?;
        let file = File::open(path)?;

        Ok(Self {
            reader: BufReader::with_capacity(64 * 1024, file),
            encoding: encoding_info.encoding,
            line_buffer: Vec::with_capacity(4096),
        })
    }

    /// Get the detected encoding
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl Iterator for EncodedLineIterator {
    type Item = anyhow::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                while self.line_buffer.last() == Some(&b'\n')
                    || self.line_buffer.last() == Some(&b'\r')
                {
                    self.line_buffer.pop();
                }

                if self.encoding == encoding_rs::UTF_8 {
                    // Fast path for UTF-8
                    match std::str::from_utf8(&self.line_buffer) {
                        Ok(s) => Some(Ok(s.to_string())),
                        Err(_) => {
                            Some(Ok(String::from_utf8_lossy(&self.line_buffer).into_owned()))
                        }
                    }
                } else {
                    let (decoded, _, had_errors) = self.encoding.decode(&self.line_buffer);
                    if had_errors {
                        log::warn!("encoding errors in line, using lossy conversion");
                    }
                    Some(Ok(decoded.into_owned()))
                }
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Read a wordlist file into trimmed, non-empty lines.
///
/// Missing files are a hard error; nothing partial is returned. When `sort`
/// is set the lines are ordered lexicographically before returning.
pub fn read_word_list(path: &Path, sort: bool) -> anyhow::Result<Vec<String>> {
    if !path.exists() {
        return Err(WlistError::NotFound(path.to_path_buf()).into());
    }

    let mut words = Vec::new();
    for line in EncodedLineIterator::new(path)? {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.push(word.to_string());
    }

    if sort {
        words.sort_unstable();
    }

    log::debug!("loaded {} words from {:?}", words.len(), path);
    Ok(words)
}

/// Load the existing content of an output file as a set.
///
/// A missing file is an empty set, not an error: the destination is created
/// on first append.
pub fn read_existing_set(path: &Path) -> anyhow::Result<HashSet<String, RandomState>> {
    let mut set = HashSet::with_hasher(RandomState::new());
    if !path.exists() {
        return Ok(set);
    }

    for line in EncodedLineIterator::new(path)? {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        set.insert(word.to_string());
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_detection() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Hello, World!").unwrap();
        writeln!(file, "Привет мир!").unwrap();

        let info = detect_encoding(file.path()).unwrap();
        assert_eq!(info.name, "UTF-8");
    }

    #[test]
    fn test_line_iterator() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "line1").unwrap();
        writeln!(file, "line2").unwrap();
        writeln!(file, "line3").unwrap();

        let iter = EncodedLineIterator::new(file.path()).unwrap();
        let lines: Vec<_> = iter.filter_map(|r| r.ok()).collect();

        assert_eq!(lines, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_read_word_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "word1").unwrap();
        writeln!(file, "word2").unwrap();
        writeln!(file, "word3").unwrap();

        let words = read_word_list(file.path(), false).unwrap();
        assert_eq!(words, vec!["word1", "word2", "word3"]);

        let sorted = read_word_list(file.path(), true).unwrap();
        assert_eq!(sorted, vec!["word1", "word2", "word3"]);
    }

    #[test]
    fn test_read_word_list_trims_and_skips_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  alpha  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "beta\r").unwrap();

        let words = read_word_list(file.path(), false).unwrap();
        assert_eq!(words, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_read_word_list_sorts() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "zebra").unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "mango").unwrap();

        let words = read_word_list(file.path(), true).unwrap();
        assert_eq!(words, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_read_word_list_missing_file() {
        let err = read_word_list(Path::new("/nonexistent/wordlist.txt"), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WlistError>(),
            Some(WlistError::NotFound(_))
        ));
    }

    #[test]
    fn test_read_word_list_lossy_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"good\n\xff\xfe\xfdbad\nalso_good\n").unwrap();

        // Must not fail, whatever the detector decides the bytes mean
        let words = read_word_list(file.path(), false).unwrap();
        assert!(!words.is_empty());
    }

    #[test]
    fn test_read_existing_set_missing_file() {
        let set = read_existing_set(Path::new("/nonexistent/output.txt")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_read_existing_set() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "word1").unwrap();
        writeln!(file, "word2").unwrap();
        writeln!(file, "word1").unwrap();

        let set = read_existing_set(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("word1"));
        assert!(set.contains("word2"));
    }
}
