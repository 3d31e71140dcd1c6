use crate::normalize;
use crate::rules::*;

// ========== Rule 1: retained charset ==========

#[test]
fn test_retain_charset_strips_foreign() {
    assert_eq!(retain_charset("h@llo w#rld"), "h llo w rld");
    assert_eq!(retain_charset("caf\u{e9}"), "caf ");
}

#[test]
fn test_retain_charset_keeps_meaningful_punct() {
    let kept = "ok: yes; no, 1.5! why? don't 50% 10-20";
    assert_eq!(retain_charset(kept), kept);
}

// ========== Rule 2: punctuation gaps ==========

#[test]
fn test_close_punct_gaps_dots() {
    assert_eq!(close_punct_gaps(". ."), "..");
    assert_eq!(close_punct_gaps(". . ."), "...");
}

#[test]
fn test_close_punct_gaps_marks() {
    assert_eq!(close_punct_gaps("! ?"), "!?");
    assert_eq!(close_punct_gaps("? !  !"), "?!!");
}

#[test]
fn test_close_punct_gaps_leaves_words() {
    assert_eq!(close_punct_gaps("end. Start"), "end. Start");
}

// ========== Rule 3: separators ==========

#[test]
fn test_space_after_separators() {
    assert_eq!(space_after_separators("a,b"), "a, b");
    assert_eq!(space_after_separators("a,,,b"), "a, b");
    assert_eq!(space_after_separators("x;;y"), "x; y");
    assert_eq!(space_after_separators("t:5"), "t: 5");
}

// ========== Rule 4: period spacing ==========

#[test]
fn test_space_after_period_sentence() {
    assert_eq!(space_after_period("end.Start"), "end. Start");
}

#[test]
fn test_space_after_period_keeps_decimals() {
    assert_eq!(space_after_period("pi is 3.14"), "pi is 3.14");
}

#[test]
fn test_space_after_period_skips_inside_multidot() {
    // Only the final dot of a run gets the space.
    assert_eq!(space_after_period("wait..ok"), "wait.. ok");
}

// ========== Rule 5: mark spacing ==========

#[test]
fn test_space_after_marks() {
    assert_eq!(space_after_marks("wow!next"), "wow! next");
    assert_eq!(space_after_marks("what!?ok"), "what!? ok");
}

// ========== Rules 6-8: run capping ==========

#[test]
fn test_cap_ellipsis() {
    assert_eq!(cap_ellipsis("....."), "...");
    assert_eq!(cap_ellipsis(".."), "..");
}

#[test]
fn test_cap_mark_runs() {
    assert_eq!(cap_mark_runs("!!!!"), "!!");
    assert_eq!(cap_mark_runs("???"), "??");
    assert_eq!(cap_mark_runs("!?"), "!?");
}

#[test]
fn test_collapse_doubled_pairs() {
    assert_eq!(collapse_doubled_pairs("!!??"), "!?");
    assert_eq!(collapse_doubled_pairs("??!!"), "?!");
}

// ========== Rule 9: quotes ==========

#[test]
fn test_strip_stray_quotes_keeps_contractions() {
    assert_eq!(strip_stray_quotes("don't"), "don't");
    assert_eq!(strip_stray_quotes("it's fine"), "it's fine");
}

#[test]
fn test_strip_stray_quotes_drops_others() {
    assert_eq!(strip_stray_quotes("'quoted'"), " quoted ");
    assert_eq!(strip_stray_quotes("rock 'n roll"), "rock  n roll");
}

// ========== Rule 10: percent ==========

#[test]
fn test_strip_stray_percent() {
    assert_eq!(strip_stray_percent("50% off"), "50% off");
    assert_eq!(strip_stray_percent("%difference"), " difference");
    assert_eq!(strip_stray_percent("100 %"), "100  ");
}

// ========== Rules 11-12: dashes ==========

#[test]
fn test_tighten_numeric_ranges() {
    assert_eq!(tighten_numeric_ranges("10 - 20"), "10-20");
    assert_eq!(tighten_numeric_ranges("3 -4"), "3-4");
    assert_eq!(tighten_numeric_ranges("10-20"), "10-20");
}

#[test]
fn test_strip_stray_dashes() {
    assert_eq!(strip_stray_dashes("well-known"), "well known");
    assert_eq!(strip_stray_dashes("10-20"), "10-20");
    assert_eq!(strip_stray_dashes("-5 below"), " 5 below");
}

#[test]
fn test_range_tightening_runs_before_dash_removal() {
    // Through the full pipeline the loose range survives as a tight one.
    assert_eq!(normalize("save 10 - 20 now"), "save 10-20 now");
}

// ========== Rule 13: whitespace ==========

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  a \t b  "), "a b");
    assert_eq!(collapse_whitespace(""), "");
}

// ========== Rules 14-15: vowel emphasis ==========

#[test]
fn test_collapse_vowel_runs() {
    assert_eq!(collapse_vowel_runs("soooo"), "soo");
    assert_eq!(collapse_vowel_runs("goooood"), "good");
    assert_eq!(collapse_vowel_runs("good"), "good");
}

#[test]
fn test_collapse_vowel_pairs() {
    assert_eq!(collapse_vowel_pairs("haha"), "ha");
    assert_eq!(collapse_vowel_pairs("hahaha"), "ha");
    assert_eq!(collapse_vowel_pairs("aoao"), "ao");
    assert_eq!(collapse_vowel_pairs("good"), "good");
}

// ========== Full pipeline ==========

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_punctuation_storm() {
    assert_eq!(normalize("Hello....world!!!???"), "Hello... world!?");
}

#[test]
fn test_normalize_percent_and_range() {
    assert_eq!(
        normalize("50%  off, save 10-20% today"),
        "50% off, save 10-20% today"
    );
}

#[test]
fn test_normalize_vowel_emphasis() {
    assert_eq!(normalize("soooo haha good"), "soo ha good");
}

#[test]
fn test_normalize_contractions_survive() {
    assert_eq!(normalize("don't stop believing"), "don't stop believing");
}

#[test]
fn test_normalize_foreign_chars_become_spaces() {
    assert_eq!(normalize("great movie \u{1F600}\u{1F600} loved it"), "great movie loved it");
}

#[test]
fn test_normalize_idempotent() {
    let samples = [
        "Hello....world!!!???",
        "50%  off, save 10-20% today",
        "soooo haha good",
        "hahaha",
        "Hmm. . . really??!!",
        "don't stop believing",
        "An AMAZING film -- would watch again!!",
        "terrible. just terrible... 0/10 would not recommend",
        "",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn test_normalize_retained_charset_invariant() {
    let samples = [
        "weird \u{2603} input \t with\nnewlines",
        "symbols *&^$#@(){}[]<>|\\/~`\"+=_",
        "mixed 100% legit 5-6 stars!!",
    ];
    for s in samples {
        let out = normalize(s);
        assert!(
            out.chars().all(|c| {
                c.is_ascii_alphanumeric() || " :;,.!?'%-".contains(c)
            }),
            "unexpected char in {out:?}"
        );
        assert!(!out.contains("  "), "double space in {out:?}");
        assert_eq!(out.trim(), out);
    }
}
