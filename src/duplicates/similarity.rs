//! Token, edit-distance and set overlap measures used by the duplicate
//! detector.

use std::collections::HashSet;

/// Edit similarity below this says nothing a token overlap does not.
const EDIT_SIMILARITY_FLOOR: f64 = 0.8;

/// Lowercased whitespace tokens longer than two characters.
fn tokenize(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() > 2)
        .collect()
}

fn jaccard(left: &HashSet<String>, right: &HashSet<String>) -> f64 {
    let union = left.union(right).count();
    if union == 0 {
        return 0.0;
    }

    left.intersection(right).count() as f64 / union as f64
}

/// Jaccard similarity of the significant words in two strings.
///
/// Short words ("a", "of", "to") carry no signal and are dropped before
/// comparing, so two strings made only of them score 0.
pub fn text_similarity(left: &str, right: &str) -> f64 {
    jaccard(&tokenize(left), &tokenize(right))
}

/// Title similarity: token overlap, or normalized Levenshtein similarity of
/// the lowercased titles when that reaches 0.8.
///
/// Short titles that differ by a typo or a suffix ("Invoice Bot" vs
/// "Invoice Bots") share no tokens but are one edit apart.
pub fn title_similarity(left: &str, right: &str) -> f64 {
    let tokens = text_similarity(left, right);

    let left = normalize_title(left);
    let right = normalize_title(right);
    if left.is_empty() || right.is_empty() {
        return tokens;
    }

    let edit = strsim::normalized_levenshtein(&left, &right);
    if edit >= EDIT_SIMILARITY_FLOOR {
        tokens.max(edit)
    } else {
        tokens
    }
}

fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive Jaccard similarity of two label lists.
pub fn set_similarity<S: AsRef<str>>(left: &[S], right: &[S]) -> f64 {
    let normalize = |items: &[S]| -> HashSet<String> {
        items
            .iter()
            .map(|item| item.as_ref().trim().to_lowercase())
            .filter(|item| !item.is_empty())
            .collect()
    };

    jaccard(&normalize(left), &normalize(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_is_fully_similar() {
        assert_eq!(text_similarity("Invoice Processing Bot", "invoice processing bot"), 1.0);
    }

    #[test]
    fn test_short_tokens_are_ignored() {
        // "of" and "to" are dropped, leaving {invoice} vs {invoice, routing}
        assert_eq!(text_similarity("invoice of", "invoice to routing"), 0.5);
        assert_eq!(text_similarity("a to of", "an it"), 0.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(text_similarity("", ""), 0.0);
        assert_eq!(set_similarity::<&str>(&[], &[]), 0.0);
    }

    #[test]
    fn test_repeated_tokens_count_once() {
        assert_eq!(text_similarity("invoice invoice", "invoice"), 1.0);
    }

    #[test]
    fn test_title_typo_scores_by_edit_distance() {
        // one deleted character out of 29
        let score = title_similarity("Invoice Processing Automation", "Invoice Procesing Automation");
        assert!((score - 28.0 / 29.0).abs() < 1e-12);

        let score = title_similarity("Invoice Bot", "Invoice Bots");
        assert!((score - 11.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_title_edit_distance_ignores_case_and_spacing() {
        assert_eq!(title_similarity("Invoice  Processing", "invoice processing"), 1.0);
    }

    #[test]
    fn test_distant_titles_fall_back_to_tokens() {
        // 8 edits over 29 characters is under the floor
        assert_eq!(
            title_similarity("Invoice Processing Automation", "Invoice Processing Bot"),
            0.5
        );
        assert_eq!(title_similarity("Expense Reporting", "Contract Renewal"), 0.0);
    }

    #[test]
    fn test_empty_titles_score_zero() {
        assert_eq!(title_similarity("", ""), 0.0);
        assert_eq!(title_similarity("Invoice", "  "), 0.0);
    }

    #[test]
    fn test_set_similarity_ignores_case() {
        let left = ["Finance", "OCR"];
        let right = ["finance", "ocr", "Mobile"];
        assert!((set_similarity(&left, &right) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sets() {
        assert_eq!(set_similarity(&["HR"], &["Legal"]), 0.0);
    }
}
