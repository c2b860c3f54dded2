//! Runs the extractor over the sample transcript corpus and checks the
//! aggregate shape of the results.

use std::collections::HashMap;

use taskscan_core::{TaskCategory, TaskStatus};
use taskscan_extraction::TaskExtractor;

#[test]
fn corpus_yields_tasks_in_every_concrete_category() {
    let extractor = TaskExtractor::new();
    let sentences = test_fixtures::transcripts();

    let results: Vec<_> = sentences
        .iter()
        .filter_map(|text| extractor.extract_task(text))
        .collect();

    assert!(!results.is_empty(), "corpus should yield at least one task");

    let mut counts: HashMap<TaskCategory, usize> = HashMap::new();
    for result in &results {
        *counts.entry(result.task.category).or_insert(0) += 1;
    }

    for category in [
        TaskCategory::Health,
        TaskCategory::Work,
        TaskCategory::Personal,
        TaskCategory::Shopping,
    ] {
        assert!(
            counts.get(&category).copied().unwrap_or(0) > 0,
            "corpus should yield at least one {category} task"
        );
    }
}

#[test]
fn corpus_results_have_fully_populated_tasks() {
    let extractor = TaskExtractor::new();

    for text in test_fixtures::transcripts() {
        let Some(result) = extractor.extract_task(&text) else {
            continue;
        };

        assert_eq!(result.task.text, text);
        assert_eq!(result.source_text, text);
        assert_eq!(result.task.status, TaskStatus::Pending);
        assert_eq!(result.task.created_at, result.task.updated_at);
        assert!(result.confidence.value() >= 0.3);
        assert!(result.confidence.value() <= 1.0);
    }
}

#[test]
fn compound_sentences_extract_a_single_dated_task() {
    // Multi-action sentences still yield exactly one task, and the first
    // matching date expression wins.
    let extractor = TaskExtractor::new();
    for text in [
        "Need to call the doctor tomorrow and schedule a follow-up for next month",
        "Have to prepare the presentation for the client meeting next week and book a conference room",
        "Must buy groceries today and prepare dinner for the family tonight",
    ] {
        let result = extractor.extract_task(text).expect("should extract");
        assert!(result.confidence.value() > 0.5);
        assert!(result.task.due_date.is_some());
    }
}
