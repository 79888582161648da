//! Accent-stripped spelling variants.
//!
//! A word with `k` accented letters has `2^k - 1` variants in which a
//! non-empty subset of those letters lost their accent. The dictionary
//! stores these variants so that a query typed without accents still
//! reaches the correctly accented entry.

use crate::unicode::{from_code_points, remove_accent};

/// Every unaccented variant of `word`, the identity excluded.
///
/// Variants are produced by branching on each accented position from left
/// to right: strip position `i`, emit, then recurse on positions after `i`.
/// For "été" this yields `eté`, `ete`, `éte`.
pub fn unaccented_variants(word: &[char]) -> Vec<Vec<char>> {
    let mut out = Vec::new();
    let mut scratch = word.to_vec();
    collect(&mut scratch, 0, &mut out);
    out
}

/// String convenience over [`unaccented_variants`].
pub fn unaccented_variant_strings(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    unaccented_variants(&chars)
        .iter()
        .map(|v| from_code_points(v))
        .collect()
}

fn collect(word: &mut [char], start: usize, out: &mut Vec<Vec<char>>) {
    for index in start..word.len() {
        let original = word[index];
        let stripped = remove_accent(original);
        if stripped == original {
            continue;
        }
        word[index] = stripped;
        out.push(word.to_vec());
        collect(word, index + 1, out);
        word[index] = original;
    }
}
