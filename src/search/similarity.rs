//! Tiered string similarity.
//!
//! Strategies are tried strongest first and the first one that fires wins:
//!
//! | Tier              | Score                                   |
//! |-------------------|-----------------------------------------|
//! | Exact             | 1.0                                     |
//! | Containment       | 0.8                                     |
//! | WordOverlap       | 0.5 + matched / max(words) * 0.3        |
//! | CharacterFallback | positional matches / max(len) * 0.3     |
//!
//! The character fallback never exceeds 0.3, so a typo can nudge a score but
//! never outweigh a real textual match.

use super::normalize::normalize;

/// Score for normalized equality.
const EXACT_SCORE: f64 = 1.0;

/// Score when one string contains the other.
const CONTAINMENT_SCORE: f64 = 0.8;

/// Floor of the word-overlap tier.
const WORD_OVERLAP_BASE: f64 = 0.5;

/// Span added on top of [`WORD_OVERLAP_BASE`] as the overlap ratio grows.
const WORD_OVERLAP_SPAN: f64 = 0.3;

/// Ceiling of the character fallback tier.
const CHARACTER_FALLBACK_SPAN: f64 = 0.3;

/// Which strategy produced a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimilarityTier {
    ExactMatch,
    Containment,
    WordOverlap,
    CharacterFallback,
}

/// A similarity score together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    pub tier: SimilarityTier,
    pub score: f64,
}

/// Similarity of two raw strings in `[0, 1]`. Both sides are normalized first.
pub fn similarity(a: &str, b: &str) -> f64 {
    classify(a, b).score
}

/// Like [`similarity`], but also reports which tier fired.
pub fn classify(a: &str, b: &str) -> Similarity {
    let a = normalize(a);
    let b = normalize(b);
    classify_normalized(&a, &b)
}

/// Tier evaluation for inputs that are already normalized.
pub(crate) fn classify_normalized(a: &str, b: &str) -> Similarity {
    let result = if let Some(score) = exact_match(a, b) {
        Similarity { tier: SimilarityTier::ExactMatch, score }
    } else if let Some(score) = containment(a, b) {
        Similarity { tier: SimilarityTier::Containment, score }
    } else if let Some(score) = word_overlap(a, b) {
        Similarity { tier: SimilarityTier::WordOverlap, score }
    } else {
        Similarity {
            tier: SimilarityTier::CharacterFallback,
            score: character_fallback(a, b),
        }
    };
    tracing::trace!(a, b, tier = ?result.tier, score = result.score, "similarity");
    result
}

/// Equal strings, including two empty ones.
fn exact_match(a: &str, b: &str) -> Option<f64> {
    (a == b).then_some(EXACT_SCORE)
}

/// One side is a substring of the other. An empty side never counts.
fn containment(a: &str, b: &str) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    (a.contains(b) || b.contains(a)).then_some(CONTAINMENT_SCORE)
}

/// Word set of a normalized string, in first-seen order.
///
/// Overlap is measured between sets, so a repeated word counts once on
/// either side. Ranking bonuses iterate the raw query words instead.
fn distinct_words(normalized: &str) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for word in normalized.split(' ').filter(|w| !w.is_empty()) {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Words of `a` that contain, or are contained in, some word of `b`.
fn word_overlap(a: &str, b: &str) -> Option<f64> {
    let words_a = distinct_words(a);
    let words_b = distinct_words(b);

    let matched = words_a
        .iter()
        .filter(|wa| words_b.iter().any(|wb| wa.contains(wb) || wb.contains(*wa)))
        .count();
    if matched == 0 {
        return None;
    }

    let total = words_a.len().max(words_b.len());
    Some(WORD_OVERLAP_BASE + (matched as f64 / total as f64) * WORD_OVERLAP_SPAN)
}

/// Fraction of aligned positions holding the same character, scaled down.
fn character_fallback(a: &str, b: &str) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    let matches = a
        .bytes()
        .zip(b.bytes())
        .filter(|(ca, cb)| ca == cb)
        .count();
    (matches as f64 / longest as f64) * CHARACTER_FALLBACK_SPAN
}
