use crate::domain::content::ContentDocument;
use serde::Serialize;
use std::collections::HashMap;

const TITLE_WEIGHT: f64 = 3.0;
const KEYWORD_WEIGHT: f64 = 2.0;
const BODY_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Below this many hits, fallback languages are searched too
    pub min_results: usize,
    /// Stop widening the search once this many hits are collected
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_results: 3,
            max_results: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub item_id: String,
    pub title: String,
    pub score: f64,
    pub source_language: String,
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| contains(v, needle))
}

fn score(title: &str, keywords: &[&[String]], body: &[&str], needle: &str) -> f64 {
    let mut total = 0.0;
    if contains(title, needle) {
        total += TITLE_WEIGHT;
    }
    if keywords.iter().any(|k| any_contains(k, needle)) {
        total += KEYWORD_WEIGHT;
    }
    if body.iter().any(|b| contains(b, needle)) {
        total += BODY_WEIGHT;
    }
    total
}

/// Score every item of `doc` against `query`, keeping only matches
pub fn search_document(doc: &ContentDocument, query: &str, language: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut push = |item_id: &str, title: &str, score: f64| {
        if score > 0.0 {
            results.push(SearchResult {
                item_id: item_id.to_string(),
                title: title.to_string(),
                score,
                source_language: language.to_string(),
            });
        }
    };

    for section in &doc.sections {
        let s = score(
            &section.title,
            &[&section.tags, &section.search_keywords],
            &[&section.content],
            &needle,
        );
        push(&section.id, &section.title, s);
    }

    for topic in &doc.topics {
        let s = score(
            &topic.title,
            &[],
            &[topic.description.as_deref().unwrap_or_default()],
            &needle,
        );
        push(&topic.id, &topic.title, s);
    }

    for tutorial in &doc.tutorials {
        let steps: Vec<&str> = tutorial
            .steps
            .iter()
            .flat_map(|step| [step.title.as_str(), step.instructions.as_str()])
            .chain(tutorial.description.as_deref())
            .collect();
        let s = score(&tutorial.title, &[], &steps, &needle);
        push(&tutorial.id, &tutorial.title, s);
    }

    for faq in &doc.faqs {
        let s = score(&faq.question, &[&faq.tags], &[&faq.answer], &needle);
        push(&faq.id, &faq.question, s);
    }

    results
}

/// Deduplicate by item id (the higher score wins), then sort by score descending.
/// Ties keep their first-seen order.
pub fn dedupe_and_sort(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut best: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<SearchResult> = Vec::new();

    for result in results {
        match best.get(&result.item_id) {
            Some(&idx) => {
                if unique[idx].score < result.score {
                    unique[idx] = result;
                }
            }
            None => {
                best.insert(result.item_id.clone(), unique.len());
                unique.push(result);
            }
        }
    }

    unique.sort_by(|a, b| b.score.total_cmp(&a.score));
    unique
}
