//! Collation of display names (character names, battletags).
//!
//! Names compare at three levels, like a root-locale collation: base letters first, then
//! accents, then case. Base letters are the NFD decomposition with combining marks removed,
//! case-folded, so `"Élan"` sorts next to `"Elan"` rather than after every ASCII name.
//! Locale-specific tailoring (such as Swedish `å` after `z`) is not applied.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

/// Compares two display names for user-facing sorting.
///
/// Accents and case are ignored first. Names with the same base letters are then ordered
/// unaccented first, and names differing only in case are ordered lowercase first, so
/// `"anna"` < `"Anna"` < `"Änna"` < `"bob"`.
///
/// # Arguments
/// - `a` - Left-hand string
/// - `b` - Right-hand string
///
/// # Returns
/// - The ordering of `a` relative to `b`
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        // Uppercase code points sort below lowercase ones, so flip the raw comparison.
        .then_with(|| b.cmp(a))
}
