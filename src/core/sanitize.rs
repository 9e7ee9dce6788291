// src/core/sanitize.rs

/// Collapse every whitespace run (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop leading/trailing punctuation, keeping inner marks ("O'Neil", "Smith-Jones").
pub fn trim_punct(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_alphanumeric())
}

pub fn is_punct_only(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_alphanumeric)
}

/// Remove every character except ASCII digits.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Everything after the first word, whitespace-normalized ("Rep. John Doe" → "John Doe").
pub fn drop_first_word(s: &str) -> String {
    s.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_folds_nbsp_and_newlines() {
        assert_eq!(normalize_ws("  Referred to\u{a0}Committee\n on  Taxation "), "Referred to Committee on Taxation");
    }

    #[test]
    fn trim_punct_keeps_inner_marks() {
        assert_eq!(trim_punct("Doe,"), "Doe");
        assert_eq!(trim_punct("O'Neil;"), "O'Neil");
        assert_eq!(trim_punct("Smith-Jones"), "Smith-Jones");
        assert!(is_punct_only("-"));
        assert!(is_punct_only("):"));
        assert!(!is_punct_only("J."));
        assert!(!is_punct_only(""));
    }

    #[test]
    fn helpers() {
        assert_eq!(digits_only("785 296-7500"), "7852967500");
        assert_eq!(drop_first_word("Rep.  Alcala"), "Alcala");
        assert_eq!(drop_first_word("Solo"), "");
    }
}
