//! Category keyword tables and the priority-ordered classification scan.

use taskscan_core::TaskCategory;

/// Keyword table per category, in classification priority order
/// (health > work > personal > shopping > other). The first category with
/// any substring match in the normalized text wins.
pub const CATEGORY_KEYWORDS: &[(TaskCategory, &[&str])] = &[
    (
        TaskCategory::Health,
        &[
            "doctor", "appointment", "medical", "health", "checkup",
            "medicine", "pharmacy", "dentist", "hospital", "clinic",
            "therapy", "treatment", "vaccine", "test", "scan",
        ],
    ),
    (
        TaskCategory::Work,
        &[
            "meeting", "deadline", "project", "report", "email",
            "call", "work", "office", "presentation", "document",
            "client", "team", "business", "conference", "interview",
        ],
    ),
    (
        TaskCategory::Personal,
        &[
            "family", "friend", "home", "house", "clean",
            "organize", "garden", "pet", "child", "parent",
            "relative", "neighbor", "community", "volunteer",
        ],
    ),
    (
        TaskCategory::Shopping,
        &[
            "buy", "purchase", "shop", "grocery", "store",
            "market", "mall", "online", "order", "delivery",
            "return", "exchange", "refund", "receipt",
        ],
    ),
    (TaskCategory::Other, &[]),
];

/// Classify the normalized text into the first matching category, falling
/// back to `default` when no keyword table matches.
pub fn determine_category(text: &str, default: TaskCategory) -> TaskCategory {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return *category;
        }
    }
    default
}

/// Number of keywords from `category`'s table present in the text.
/// Feeds the keyword bonus in confidence scoring.
pub fn keyword_hits(text: &str, category: TaskCategory) -> usize {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, keywords)| keywords.iter().filter(|k| text.contains(**k)).count())
        .unwrap_or(0)
}
