//! Autocomplete suggestions and spelling correction.

use super::normalize::normalize;
use crate::catalog::CatalogItem;
use ahash::AHashSet;
use rapidfuzz::distance::jaro_winkler;

/// Minimum vocabulary word length considered for corrections.
const MIN_CORRECTION_WORD_LENGTH: usize = 3;

/// Literal item and category names containing the normalized query.
///
/// Item names come first, then category names, each in input order. A
/// string appears at most once even when several items share it. No fuzzy
/// matching: a suggestion must literally complete what was typed.
pub fn suggest<'a, S: AsRef<str>>(
    query: &str,
    catalog: &'a [CatalogItem],
    category_names: &'a [S],
    min_query_length: usize,
    limit: usize,
) -> Vec<&'a str> {
    let normalized = normalize(query);
    if normalized.len() < min_query_length || limit == 0 {
        return Vec::new();
    }

    let candidates = catalog
        .iter()
        .map(|item| item.name.as_str())
        .chain(category_names.iter().map(|name| name.as_ref()));

    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut suggestions = Vec::with_capacity(limit);
    for candidate in candidates {
        if !normalize(candidate).contains(&normalized) || !seen.insert(candidate) {
            continue;
        }
        suggestions.push(candidate);
        if suggestions.len() == limit {
            break;
        }
    }

    tracing::debug!(query = %normalized, suggestions = suggestions.len(), "Built suggestions");
    suggestions
}

/// Closest vocabulary word for `word`, if it is similar enough.
fn closest_word<'v>(word: &str, vocabulary: &[&'v str], threshold: f64) -> Option<(&'v str, f64)> {
    let mut best: Option<(&'v str, f64)> = None;
    for &candidate in vocabulary {
        let score = jaro_winkler::similarity(word.chars(), candidate.chars());
        if score >= threshold && best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }
    best
}

/// Propose a corrected query built from words that occur in the catalog.
///
/// Every query word that does not already occur in the vocabulary (item
/// names, tags and category names) is replaced by its closest vocabulary
/// word when the Jaro-Winkler similarity reaches `threshold`. Returns `None`
/// when nothing was corrected.
pub fn did_you_mean<S: AsRef<str>>(
    query: &str,
    catalog: &[CatalogItem],
    category_names: &[S],
    min_query_length: usize,
    threshold: f64,
) -> Option<String> {
    let normalized = normalize(query);
    if normalized.len() < min_query_length {
        return None;
    }

    let sources: Vec<String> = catalog
        .iter()
        .flat_map(|item| std::iter::once(&item.name).chain(item.tags.iter()))
        .map(|text| normalize(text))
        .chain(category_names.iter().map(|name| normalize(name.as_ref())))
        .collect();

    let mut seen: AHashSet<&str> = AHashSet::new();
    let vocabulary: Vec<&str> = sources
        .iter()
        .flat_map(|text| text.split(' '))
        .filter(|word| word.len() >= MIN_CORRECTION_WORD_LENGTH && seen.insert(*word))
        .collect();

    let mut corrected = false;
    let words: Vec<&str> = normalized
        .split(' ')
        .map(|word| {
            if word.len() < MIN_CORRECTION_WORD_LENGTH || seen.contains(word) {
                return word;
            }
            match closest_word(word, &vocabulary, threshold) {
                Some((replacement, score)) => {
                    tracing::debug!(word, replacement, score, "Corrected query word");
                    corrected = true;
                    replacement
                }
                None => word,
            }
        })
        .collect();

    corrected.then(|| words.join(" "))
}
