//! Production-environment classification.
//!
//! A heuristic, keyword-based judgment that a context or config file likely
//! refers to a live production environment. Used only to emit warnings,
//! never to block actions.

use std::path::Path;

/// Keywords that only count when they form a whole token ("prod" must not
/// fire on "production").
const EXACT_KEYWORDS: &[&str] = &["prod"];

/// Keywords that count anywhere in the text.
const SUBSTRING_KEYWORDS: &[&str] = &["prd", "production"];

/// Characters that delimit tokens inside context and file names.
const SEPARATORS: &[char] = &['-', '_', '.', ' '];

/// Returns true if `keyword` occurs in `text` as a maximal token, bounded on
/// both sides by a separator or the string edge.
///
/// Every occurrence is checked: an early hit inside a larger token (the
/// "prod" in "reproduce-prod") must not mask a later whole-word hit.
pub fn is_exact_word_match(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(pos) = text[from..].find(keyword) {
        let start = from + pos;
        let end = start + keyword.len();

        let valid_start = start == 0
            || text[..start]
                .chars()
                .next_back()
                .is_some_and(|c| SEPARATORS.contains(&c));
        let valid_end = end >= text.len()
            || text[end..]
                .chars()
                .next()
                .is_some_and(|c| SEPARATORS.contains(&c));

        if valid_start && valid_end {
            return true;
        }

        from = end;
    }

    false
}

/// Returns true if a context, cluster, or file name looks like production.
pub fn is_production_name(name: &str) -> bool {
    let lower = name.to_lowercase();

    if EXACT_KEYWORDS.iter().any(|k| is_exact_word_match(&lower, k)) {
        return true;
    }

    SUBSTRING_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Returns true if the config file's base name looks like production.
pub fn is_production_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_production_name)
}

/// Combined check: a context/file pair is production if either the context
/// name alone or the file's base name alone matches.
pub fn is_production(context_name: &str, config_path: &Path) -> bool {
    is_production_name(context_name) || is_production_file(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_exact_word_match_bounded() {
        assert!(is_exact_word_match("prod", "prod"));
        assert!(is_exact_word_match("my-prod-cluster", "prod"));
        assert!(is_exact_word_match("my_prod", "prod"));
        assert!(is_exact_word_match("prod.us-east-1", "prod"));
        assert!(is_exact_word_match("team prod", "prod"));

        assert!(!is_exact_word_match("production", "prod"));
        assert!(!is_exact_word_match("my-production-cluster", "prod"));
        assert!(!is_exact_word_match("reproduce", "prod"));
        assert!(!is_exact_word_match("dev", "prod"));
    }

    #[test]
    fn test_exact_word_match_scans_all_occurrences() {
        // First occurrence is embedded in a larger token; the second is a
        // whole word and must still be found.
        assert!(is_exact_word_match("reproduce-prod", "prod"));
        assert!(is_exact_word_match("production-prod-a", "prod"));
        assert!(!is_exact_word_match("reproduce-produce", "prod"));
    }

    #[test]
    fn test_is_production_name() {
        assert!(is_production_name("staging-prd"));
        assert!(is_production_name("nonproduction"));
        assert!(is_production_name("PROD"));
        assert!(is_production_name("my-prod-cluster"));
        assert!(!is_production_name("dev"));
        assert!(!is_production_name("producer"));
    }

    #[test]
    fn test_is_production_file() {
        assert!(is_production_file(Path::new("/configs/prod-cluster.yaml")));
        assert!(is_production_file(Path::new("company-production")));
        assert!(!is_production_file(Path::new("/configs/dev.yaml")));
    }

    #[test]
    fn test_combined_check() {
        // Either side alone is enough.
        assert!(is_production("prod-ctx", Path::new("dev.yaml")));
        assert!(is_production("dev-ctx", Path::new("prod.yaml")));
        assert!(!is_production("dev-ctx", Path::new("dev.yaml")));
    }
}
