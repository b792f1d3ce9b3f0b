/// What the model's free text actually said, before any tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Like,
    Pass,
    Ambiguous,
}

/// Extract a verdict from free text by case-insensitive token search.
/// Text containing both tokens or neither is ambiguous; the caller decides
/// what ambiguity means.
pub fn parse_verdict(text: &str) -> Verdict {
    let upper = text.to_uppercase();
    match (upper.contains("LIKE"), upper.contains("PASS")) {
        (true, false) => Verdict::Like,
        (false, true) => Verdict::Pass,
        _ => Verdict::Ambiguous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_like_is_like() {
        assert_eq!(parse_verdict("Decision: LIKE\nReason: shared interests"), Verdict::Like);
    }

    #[test]
    fn plain_pass_is_pass() {
        assert_eq!(parse_verdict("Decision: PASS\nReason: nothing in common"), Verdict::Pass);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(parse_verdict("i would like to meet them"), Verdict::Like);
        assert_eq!(parse_verdict("I'll pass on this one"), Verdict::Pass);
    }

    #[test]
    fn both_tokens_are_ambiguous() {
        assert_eq!(
            parse_verdict("I could LIKE them, but I think I'll PASS."),
            Verdict::Ambiguous
        );
    }

    #[test]
    fn neither_token_is_ambiguous() {
        assert_eq!(parse_verdict("I'm not sure about this person."), Verdict::Ambiguous);
        assert_eq!(parse_verdict(""), Verdict::Ambiguous);
    }

    #[test]
    fn substring_match_treats_dislike_as_like() {
        // Token search is a substring match, so "dislike" still counts.
        assert_eq!(parse_verdict("I dislike their bio"), Verdict::Like);
    }
}
