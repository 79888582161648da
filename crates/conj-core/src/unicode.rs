//! Character-level Unicode helpers for the extended Latin alphabet used by
//! French and Italian.
//!
//! Classification and accent removal only cover the Latin-1 range
//! (U+00C0..U+00FF); characters outside it pass through unchanged.

/// Latin-1 to ASCII table for U+00C0..U+00FF. A few entries have bogus
/// translations but none of them occur in French or Italian words.
const ACCENT_REMOVAL_TABLE: &[u8; 64] = b"AAAAAA_CEEEEIIII\
DNOOOOOxOUUUUYbB\
aaaaaa-ceeeeiiii\
dnooooo/ouuuuyby";

/// Malformed byte sequence handed to [`to_code_points`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid UTF-8 at byte offset {offset}")]
pub struct EncodingError {
    pub offset: usize,
}

/// Decode UTF-8 bytes into a sequence of Unicode scalar values.
pub fn to_code_points(bytes: &[u8]) -> Result<Vec<char>, EncodingError> {
    std::str::from_utf8(bytes)
        .map(|s| s.chars().collect())
        .map_err(|e| EncodingError {
            offset: e.valid_up_to(),
        })
}

pub fn from_code_points(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Base letter of an accented Latin-1 letter, or `c` itself.
pub fn remove_accent(c: char) -> char {
    match c {
        '\u{C0}'..='\u{FF}' => char::from(ACCENT_REMOVAL_TABLE[c as usize - 0xC0]),
        _ => c,
    }
}

pub fn remove_accents(s: &str) -> String {
    s.chars().map(remove_accent).collect()
}

/// True for ASCII vowels (including `y`) and accented Latin-1 vowels.
pub fn is_vowel(c: char) -> bool {
    if "aeiouyAEIOUY".contains(c) {
        return true;
    }
    if !('\u{C0}'..='\u{FF}').contains(&c) {
        return false;
    }
    !matches!(
        c,
        'Ç' | 'Ð' | 'Ñ' | '×' | 'Þ' | 'ç' | 'ð' | 'ñ' | '÷' | 'þ'
    )
}

pub fn is_h(c: char) -> bool {
    c == 'h' || c == 'H'
}

/// Lower-case a string, folding only ASCII and Latin-1 capitals.
pub fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'A'..='Z' => c.to_ascii_lowercase(),
            '\u{C0}'..='\u{DF}' if c != '×' && c != 'ß' => {
                char::from_u32(c as u32 + 0x20).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}
