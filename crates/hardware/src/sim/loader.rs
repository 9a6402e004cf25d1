//! Program Image Loader.
//!
//! This module reads the text program image the external agent loads before
//! releasing hold. It performs:
//! 1. **Parsing:** One 16-bit instruction word per line, as bare binary digits,
//!    `0x` hexadecimal, or `0b` binary, with `_` separators allowed.
//! 2. **Filtering:** Blank lines and comments (`#`, `--`, `//` to end of line) are skipped.
//! 3. **Reporting:** Malformed lines are rejected with their 1-based line number.

use std::fs;
use std::path::Path;

use crate::common::error::{Result, SimError};

/// Comment introducers recognised in program images.
const COMMENT_MARKERS: [&str; 3] = ["#", "--", "//"];

/// Parses a program image held in memory.
///
/// # Arguments
///
/// * `text` - Image contents.
///
/// # Returns
///
/// The instruction words in load order.
///
/// # Errors
///
/// Returns [`SimError::Parse`] for the first line that is not a valid 16-bit word.
///
/// # Examples
///
/// ```
/// use shpipe_core::sim::loader::parse_image;
///
/// let image = "0111000100000001  # ADD #1,R1\n0x4100 // SHLL R1\n\n0b0000_0000_0001_1011\n";
/// assert_eq!(parse_image(image).unwrap(), vec![0x7101, 0x4100, 0x001B]);
/// ```
pub fn parse_image(text: &str) -> Result<Vec<u16>> {
    let mut words = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let content = COMMENT_MARKERS
            .iter()
            .filter_map(|marker| raw.find(marker))
            .min()
            .map_or(raw, |cut| &raw[..cut])
            .trim();
        if content.is_empty() {
            continue;
        }
        let word = parse_word(content).ok_or_else(|| SimError::Parse {
            line: index + 1,
            text: content.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the file cannot be read, otherwise as [`parse_image`].
pub fn load_image_file(path: impl AsRef<Path>) -> Result<Vec<u16>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_image(&text)
}

/// Parses one numeral into a 16-bit word.
fn parse_word(token: &str) -> Option<u16> {
    let digits: String = token.chars().filter(|&c| c != '_').collect();
    let (body, radix) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (bin, 2)
    } else {
        (digits.as_str(), 2)
    };
    if body.is_empty() || body.starts_with(['+', '-']) {
        return None;
    }
    u16::from_str_radix(body, radix).ok()
}
