//! Text canonicalization shared by every scorer.

/// Normalize text for comparison: lowercase, strip everything except ASCII
/// letters, digits and whitespace, then collapse whitespace runs.
///
/// - `"Polo-Shirts!"` → `"poloshirts"`
/// - `"  Organic   Cotton\tTee "` → `"organic cotton tee"`
/// - `"Café"` → `"caf"`
///
/// Whitespace is trimmed after symbols are removed, so the output never
/// starts or ends with a space and normalizing twice is a no-op.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
