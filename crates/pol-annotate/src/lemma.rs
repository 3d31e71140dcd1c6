//! Rule-based lemmatizer: irregular-form table plus suffix heuristics.
//!
//! Best-effort by design. Without a dictionary some `-ed`/`-ing` forms are
//! ambiguous (`hate+d` vs `want+ed`); the silent-`e` restoration set below
//! covers the common cases and everything stays deterministic and total.

use std::collections::HashMap;
use std::sync::LazyLock;

static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("am", "be");
    m.insert("is", "be");
    m.insert("are", "be");
    m.insert("was", "be");
    m.insert("were", "be");
    m.insert("been", "be");
    m.insert("being", "be");
    m.insert("has", "have");
    m.insert("had", "have");
    m.insert("having", "have");
    m.insert("does", "do");
    m.insert("did", "do");
    m.insert("done", "do");
    m.insert("doing", "do");
    m.insert("goes", "go");
    m.insert("went", "go");
    m.insert("going", "go");
    m.insert("gone", "go");
    m.insert("made", "make");
    m.insert("making", "make");
    m.insert("said", "say");
    m.insert("saying", "say");
    m.insert("got", "get");
    m.insert("gotten", "get");
    m.insert("getting", "get");
    m.insert("saw", "see");
    m.insert("seen", "see");
    m.insert("came", "come");
    m.insert("coming", "come");
    m.insert("took", "take");
    m.insert("taken", "take");
    m.insert("taking", "take");
    m.insert("gave", "give");
    m.insert("given", "give");
    m.insert("giving", "give");
    m.insert("knew", "know");
    m.insert("known", "know");
    m.insert("thought", "think");
    m.insert("felt", "feel");
    m.insert("left", "leave");
    m.insert("bought", "buy");
    m.insert("brought", "bring");
    m.insert("told", "tell");
    m.insert("hated", "hate");
    m.insert("hating", "hate");
    m.insert("liked", "like");
    m.insert("liking", "like");
    m.insert("movies", "movie");
    m.insert("found", "find");
    m.insert("kept", "keep");
    m.insert("meant", "mean");
    m.insert("men", "man");
    m.insert("women", "woman");
    m.insert("children", "child");
    m
});

// Consonants whose doubling is inflectional ("stopped" -> "stop").
const UNDOUBLE: &[char] = &['b', 'd', 'g', 'm', 'n', 'p', 'r', 't'];
// Stem finals that usually dropped a silent e ("releas" -> "release").
const RESTORE_E: &[char] = &['s', 'c', 'g', 'v', 'z', 'u'];

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

fn finish_stem(stem: &str) -> String {
    let mut chars = stem.chars().rev();
    let last = chars.next();
    let prev = chars.next();
    match (prev, last) {
        (Some(p), Some(l)) if p == l => {
            if UNDOUBLE.contains(&l) {
                stem[..stem.len() - 1].to_string()
            } else {
                stem.to_string()
            }
        }
        (_, Some(l)) if RESTORE_E.contains(&l) => format!("{stem}e"),
        _ => stem.to_string(),
    }
}

/// Lowercased dictionary base form of a word.
///
/// Tokens carrying digits or symbols (numbers, percentages, ranges) pass
/// through lowercased and otherwise untouched.
pub fn lemmatize(word: &str) -> String {
    let lower = word.to_lowercase();
    if !lower.chars().all(|c| c.is_ascii_alphabetic()) {
        return lower;
    }
    if let Some(&base) = IRREGULAR.get(lower.as_str()) {
        return base.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        if lower.len() > 4 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        if lower.len() > 4 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        if stem.len() >= 2 && has_vowel(stem) {
            return finish_stem(stem);
        }
        return lower;
    }
    if lower.ends_with("eed") {
        if lower.len() > 4 {
            return lower[..lower.len() - 1].to_string();
        }
        return lower;
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if stem.len() >= 2 && has_vowel(stem) {
            return finish_stem(stem);
        }
        return lower;
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower;
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if stem.ends_with('s')
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if lower.len() > 3 {
            return stem.to_string();
        }
    }
    lower
}
