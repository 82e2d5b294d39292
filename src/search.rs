//! Case-insensitive substring search over name lists.

/// Returns every name containing `term` (case-insensitive), sorted ascending.
///
/// An empty result is valid. Callers decide what to do with the cardinality:
/// a single match may be switched to directly, multiple matches are listed
/// for the user to disambiguate, never auto-selected.
pub fn search<'a, I>(haystack: I, term: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let term = term.to_lowercase();

    let mut matches: Vec<String> = haystack
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&term))
        .map(str::to_string)
        .collect();

    matches.sort();
    matches
}
