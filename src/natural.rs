//! Natural ("human") ordering of file names
//!
//! A name is split into alternating text and digit runs. Digit runs compare by
//! numeric value and text runs compare case-insensitively, so `file2` sorts
//! before `file10`. Any Unicode decimal digit counts, so `ملف ٢` sorts before
//! `ملف ١٠`.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("DIGIT_RUN regex is invalid"));

/// Code points of the zero digit of every Unicode `Nd` block. Each block holds
/// ten consecutive digits.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// ASCII form of a decimal digit from any script.
///
/// Digits missing from `DIGIT_ZEROS` (newer Unicode blocks) are kept as they
/// are, which still orders them consistently.
fn ascii_digit(c: char) -> char {
    let cp = c as u32;
    let idx = DIGIT_ZEROS.partition_point(|&zero| zero <= cp);
    idx.checked_sub(1)
        .map(|i| cp - DIGIT_ZEROS[i])
        .filter(|&value| value <= 9)
        .and_then(|value| char::from_digit(value, 10))
        .unwrap_or(c)
}

/// One element of a natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    /// Lowercased non-digit run (may be empty at the edges of a name)
    Text(String),
    /// Digit run converted to ASCII with leading zeros stripped; `""` is zero
    Number(String),
}

impl KeyPart {
    fn number(digits: &str) -> Self {
        let ascii: String = digits.chars().map(ascii_digit).collect();
        KeyPart::Number(ascii.trim_start_matches('0').to_string())
    }
}

impl Ord for KeyPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyPart::Text(a), KeyPart::Text(b)) => a.cmp(b),
            // Same length without leading zeros means digit-wise order is numeric order
            (KeyPart::Number(a), KeyPart::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            // Keys from `NaturalKey::new` never line up a number against text
            (KeyPart::Number(_), KeyPart::Text(_)) => Ordering::Less,
            (KeyPart::Text(_), KeyPart::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for natural ordering.
///
/// Always starts and ends with a `Text` part, so parts at the same index have
/// the same kind in any two keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaturalKey(Vec<KeyPart>);

impl NaturalKey {
    pub fn new(name: &str) -> Self {
        let mut parts = Vec::new();
        let mut last = 0;
        for m in DIGIT_RUN.find_iter(name) {
            parts.push(KeyPart::Text(name[last..m.start()].to_lowercase()));
            parts.push(KeyPart::number(m.as_str()));
            last = m.end();
        }
        parts.push(KeyPart::Text(name[last..].to_lowercase()));
        Self(parts)
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }
}

/// Compare two names by their natural keys.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

/// Stable in-place natural sort. Names with equal keys keep their relative order.
pub fn sort_natural(names: &mut [String]) {
    names.sort_by_cached_key(|name| NaturalKey::new(name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        sort_natural(&mut v);
        v
    }

    #[test]
    fn test_key_splits_digit_runs() {
        let key = NaturalKey::new("File10b2");
        assert_eq!(
            key.parts(),
            &[
                KeyPart::Text("file".to_string()),
                KeyPart::Number("10".to_string()),
                KeyPart::Text("b".to_string()),
                KeyPart::Number("2".to_string()),
                KeyPart::Text(String::new()),
            ]
        );
    }

    #[test]
    fn test_key_of_pure_number_is_aligned() {
        let key = NaturalKey::new("42");
        assert_eq!(
            key.parts(),
            &[
                KeyPart::Text(String::new()),
                KeyPart::Number("42".to_string()),
                KeyPart::Text(String::new()),
            ]
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(NaturalKey::new("").parts(), &[KeyPart::Text(String::new())]);
    }

    #[test]
    fn test_numeric_segments_sort_by_value() {
        assert_eq!(sorted(&["a10", "a2", "a1"]), vec!["a1", "a2", "a10"]);
        assert_eq!(
            sorted(&["file10.txt", "file2.txt", "file1.txt"]),
            vec!["file1.txt", "file2.txt", "file10.txt"]
        );
    }

    #[test]
    fn test_case_insensitive_text() {
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Equal);
        assert_eq!(sorted(&["b", "A", "c"]), vec!["A", "b", "c"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        assert_eq!(
            sorted(&["file.txt", "File.txt"]),
            vec!["file.txt", "File.txt"]
        );
        assert_eq!(
            sorted(&["File.txt", "file.txt"]),
            vec!["File.txt", "file.txt"]
        );
    }

    #[test]
    fn test_leading_zeros_compare_equal() {
        assert_eq!(natural_cmp("img007", "img7"), Ordering::Equal);
        assert_eq!(natural_cmp("img007", "img8"), Ordering::Less);
        assert_eq!(natural_cmp("0", "00"), Ordering::Equal);
    }

    #[test]
    fn test_arabic_indic_digits_sort_by_value() {
        assert_eq!(
            sorted(&["ملف ١٠.txt", "ملف ٢.txt", "ملف ١.txt"]),
            vec!["ملف ١.txt", "ملف ٢.txt", "ملف ١٠.txt"]
        );
        assert_eq!(
            NaturalKey::new("ملف ١٠").parts()[1],
            KeyPart::Number("10".to_string())
        );
    }

    #[test]
    fn test_digits_from_different_scripts_compare_equal() {
        assert_eq!(natural_cmp("page ١٠", "page 10"), Ordering::Equal);
        // Extended Arabic-Indic and Devanagari
        assert_eq!(natural_cmp("v۳", "v3"), Ordering::Equal);
        assert_eq!(natural_cmp("v९", "v10"), Ordering::Less);
        // Fullwidth digits
        assert_eq!(natural_cmp("f１２", "f9"), Ordering::Greater);
    }

    #[test]
    fn test_ascii_digit() {
        assert_eq!(ascii_digit('7'), '7');
        assert_eq!(ascii_digit('٧'), '7');
        assert_eq!(ascii_digit('𝟘'), '0');
        assert_eq!(ascii_digit('a'), 'a');
    }

    #[test]
    fn test_numbers_beyond_u64() {
        let big = "n99999999999999999999999";
        let bigger = "n100000000000000000000000";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }

    #[test]
    fn test_text_prefix_sorts_first() {
        // Mirrors list comparison: a shorter key that is a prefix sorts first
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
    }

    #[test]
    fn test_mixed_realistic_names() {
        assert_eq!(
            sorted(&["Chapter 10.md", "chapter 9.md", "Chapter 1.md", "appendix.md"]),
            vec!["appendix.md", "Chapter 1.md", "chapter 9.md", "Chapter 10.md"]
        );
    }
}
