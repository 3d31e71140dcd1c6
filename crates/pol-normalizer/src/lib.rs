//! Lexical normalizer — ordered regex rewrite passes over raw text.
//!
//! Canonicalizes punctuation, spacing, repeated characters and contractions
//! before linguistic annotation. The passes are order-sensitive: each one
//! operates on the output of the previous one (range tightening must run
//! before stray-dash removal, ellipsis capping after period spacing, and so
//! on), so they are applied through a fixed [`RULES`] table.
//!
//! `normalize` is total and pure: any input string produces a string that
//! contains only `[a-zA-Z0-9 :;,.!?'%-]` with single internal spaces.

pub mod rules;

/// The ordered rewrite passes, by name. Order matters.
pub static RULES: &[(&str, fn(&str) -> String)] = &[
    ("retain_charset", rules::retain_charset),
    ("close_punct_gaps", rules::close_punct_gaps),
    ("space_after_separators", rules::space_after_separators),
    ("space_after_period", rules::space_after_period),
    ("space_after_marks", rules::space_after_marks),
    ("cap_ellipsis", rules::cap_ellipsis),
    ("cap_mark_runs", rules::cap_mark_runs),
    ("collapse_doubled_pairs", rules::collapse_doubled_pairs),
    ("strip_stray_quotes", rules::strip_stray_quotes),
    ("strip_stray_percent", rules::strip_stray_percent),
    ("tighten_numeric_ranges", rules::tighten_numeric_ranges),
    ("strip_stray_dashes", rules::strip_stray_dashes),
    ("collapse_whitespace", rules::collapse_whitespace),
    ("collapse_vowel_runs", rules::collapse_vowel_runs),
    ("collapse_vowel_pairs", rules::collapse_vowel_pairs),
];

/// Apply all rewrite passes in order.
///
/// ```
/// assert_eq!(pol_normalizer::normalize("Hello....world!!!???"), "Hello... world!?");
/// assert_eq!(pol_normalizer::normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut result = text.to_string();
    for (_, rule) in RULES {
        result = rule(&result);
    }
    result
}

#[cfg(test)]
mod tests;
