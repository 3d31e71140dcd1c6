//! The ordered rewrite passes behind [`normalize`](crate::normalize).
//!
//! Each pass is a non-overlapping left-to-right `replace_all`; the two passes
//! whose matches can recreate their own pattern iterate to a fixed point.
//! Several patterns need lookaround or backreferences, which the plain
//! `regex` engine does not support, so the whole module compiles through
//! `fancy_regex`.

use fancy_regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_FOREIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 :;,.!?'%-]").unwrap());
static RE_DOT_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\.) +(\.)").unwrap());
static RE_MARK_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([!?]) +([!?])").unwrap());
static RE_SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([:;,])\1*").unwrap());
static RE_SENTENCE_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?!(?<=[0-9]\.)[0-9]|\.)").unwrap());
static RE_MARK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([!?]+)").unwrap());
static RE_LONG_ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").unwrap());
static RE_REPEATED_MARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([!?])\1{1,}").unwrap());
static RE_DOUBLED_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([!?])\1([!?])\2").unwrap());
static RE_STRAY_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(?!(?<=[a-zA-Z]')[a-zA-Z])").unwrap());
static RE_STRAY_PERCENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?<![0-9])%").unwrap());
static RE_LOOSE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)\s*-\s*(\d)").unwrap());
static RE_STRAY_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(?!(?<=[0-9]-)[0-9])").unwrap());
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([aeiouy])\1\1+").unwrap());
static RE_VOWEL_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([aeiouy])\1\2").unwrap());

/// Rule 1: replace every character outside the retained set with a space.
///
/// Retained: letters, digits, space, and the punctuation that can carry
/// meaning (`: ; , . ! ? ' % -`).
pub fn retain_charset(text: &str) -> String {
    RE_FOREIGN.replace_all(text, " ").into_owned()
}

/// Rule 2: close gaps between consecutive periods and between consecutive
/// exclamation/question marks (`". ."` → `".."`, `"! ?"` → `"!?"`).
///
/// Runs to a fixed point: a single pass over `". . ."` closes only the first
/// gap because matches cannot overlap.
pub fn close_punct_gaps(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let joined = RE_DOT_GAP.replace_all(&current, "$1$2");
        let next = RE_MARK_GAP.replace_all(&joined, "$1$2").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Rule 3: collapse runs of the same `:`/`;`/`,` to one mark plus a space.
pub fn space_after_separators(text: &str) -> String {
    RE_SEPARATOR_RUN.replace_all(text, "$1 ").into_owned()
}

/// Rule 4: put a space after a period unless it is a decimal point or part
/// of a multi-dot run.
pub fn space_after_period(text: &str) -> String {
    RE_SENTENCE_DOT.replace_all(text, ". ").into_owned()
}

/// Rule 5: put a space after every run of exclamation/question marks.
pub fn space_after_marks(text: &str) -> String {
    RE_MARK_RUN.replace_all(text, "$1 ").into_owned()
}

/// Rule 6: cap runs of 3+ periods at exactly three (ellipsis).
pub fn cap_ellipsis(text: &str) -> String {
    RE_LONG_ELLIPSIS.replace_all(text, "...").into_owned()
}

/// Rule 7: cap repeated runs of the same `!` or `?` at exactly two.
pub fn cap_mark_runs(text: &str) -> String {
    RE_REPEATED_MARK.replace_all(text, "$1$1").into_owned()
}

/// Rule 8: collapse a doubled mark pair to a single pair (`"!!??"` → `"!?"`).
pub fn collapse_doubled_pairs(text: &str) -> String {
    RE_DOUBLED_PAIR.replace_all(text, "$1$2").into_owned()
}

/// Rule 9: drop single quotes not sitting directly between two letters,
/// which keeps contractions like `don't` and strips stray quotes.
pub fn strip_stray_quotes(text: &str) -> String {
    RE_STRAY_QUOTE.replace_all(text, " ").into_owned()
}

/// Rule 10: drop `%` signs not immediately preceded by a digit.
pub fn strip_stray_percent(text: &str) -> String {
    RE_STRAY_PERCENT.replace_all(text, " ").into_owned()
}

/// Rule 11: tighten a digit-dash-digit range, removing surrounding spaces
/// (`"10 - 20"` → `"10-20"`). Must run before [`strip_stray_dashes`].
pub fn tighten_numeric_ranges(text: &str) -> String {
    RE_LOOSE_RANGE
        .replace_all(text, |caps: &Captures| format!("{}-{}", &caps[1], &caps[2]))
        .into_owned()
}

/// Rule 12: drop every dash that is not part of a numeric range.
pub fn strip_stray_dashes(text: &str) -> String {
    RE_STRAY_DASH.replace_all(text, " ").into_owned()
}

/// Rule 13: collapse whitespace runs to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    RE_SPACES.replace_all(text, " ").trim().to_string()
}

/// Rule 14: cap runs of 3+ identical vowels at two (`"soooo"` → `"soo"`).
pub fn collapse_vowel_runs(text: &str) -> String {
    RE_VOWEL_RUN.replace_all(text, "$1$1").into_owned()
}

/// Rule 15: collapse a doubled two-character emphasis pattern whose second
/// character is a vowel (`"haha"`-style `XYXY` → `XY`). Rule 14 guarantees
/// X ≠ Y when both are vowels. Runs to a fixed point so longer repetitions
/// (`"hahaha"`) fully collapse and the normalizer stays idempotent.
pub fn collapse_vowel_pairs(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = RE_VOWEL_PAIR.replace_all(&current, "$1$2").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}
