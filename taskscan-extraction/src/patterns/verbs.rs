//! Task-indicating verb phrases. A sentence with none of these is not a task.

/// Verb phrases checked by plain substring containment against the
/// normalized (lowercased, trimmed) sentence, in fixed order.
pub const TASK_VERBS: &[&str] = &[
    "need", "have to", "must", "should", "want to", "plan to",
    "going to", "gonna", "call", "schedule", "book", "make",
    "set up", "arrange", "prepare", "do", "complete", "finish",
    "submit", "send", "write", "create", "organize", "clean",
    "buy", "purchase", "get", "pick up", "drop off",
];

/// All verb phrases present in the normalized text.
pub fn matched_verbs(text: &str) -> Vec<&'static str> {
    TASK_VERBS
        .iter()
        .copied()
        .filter(|verb| text.contains(verb))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_multi_word_phrases() {
        let matched = matched_verbs("i have to pick up the kids");
        assert!(matched.contains(&"have to"));
        assert!(matched.contains(&"pick up"));
    }

    #[test]
    fn no_match_for_plain_statements() {
        assert!(matched_verbs("the weather is nice").is_empty());
        assert!(matched_verbs("i like pizza").is_empty());
    }

    #[test]
    fn substring_containment_matches_inside_words() {
        // "complete" inside "completed" still counts; the gate is a plain
        // substring check, not a tokenizer.
        assert!(!matched_verbs("the report is completed").is_empty());
    }
}
