//! Canonical spelling of symbols.
//!
//! A symbol is any string. Single characters are atomic elements, composite symbols are
//! spelled with their characters sorted, so that one composite has exactly one spelling
//! regardless of the order in which it was assembled.

use std::collections::BTreeSet;

/// Sort the characters of `symbol`.
pub fn canonical(symbol: &str) -> String {
    let mut chars: Vec<char> = symbol.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// The canonical product of joining two symbols.
pub fn join(left: &str, right: &str) -> String {
    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    canonical(&joined)
}

/// The distinct atomic elements (single characters) of `symbol`.
pub fn elements(symbol: &str) -> BTreeSet<String> {
    symbol.chars().map(String::from).collect()
}

/// Number of atomic elements in `symbol`.
pub fn symbol_len(symbol: &str) -> usize {
    symbol.chars().count()
}
