use std::collections::HashSet;

/// Weight given to exact token matches
const EXACT_MATCH_WEIGHT: f64 = 0.7;
/// Weight given to partial (substring) matches
const PARTIAL_MATCH_WEIGHT: f64 = 0.3;

/// Calculate a skill overlap score (0-1) between required and offered skills
///
/// Exact matches dominate; required tokens without an exact match earn
/// partial credit when they contain (or are contained in) an offered token.
/// Substring containment is a deliberately crude heuristic - "plumbing" vs
/// "plumber" does not match, and no semantic similarity is attempted.
///
/// Either side being empty means no information, which scores the neutral 0.5
/// rather than penalizing the candidate.
pub fn skill_match(required: &[String], offered: &[String]) -> f64 {
    let required: Vec<String> = normalize(required);
    let offered: Vec<String> = normalize(offered);

    if required.is_empty() || offered.is_empty() {
        return 0.5;
    }

    let offered_set: HashSet<&str> = offered.iter().map(String::as_str).collect();

    let mut exact_count = 0usize;
    let mut partial_count = 0usize;

    for req in &required {
        if offered_set.contains(req.as_str()) {
            exact_count += 1;
        } else if offered
            .iter()
            .any(|off| off.contains(req.as_str()) || req.contains(off.as_str()))
        {
            // Each required token counts at most once, even if it
            // partially matches several offered tokens
            partial_count += 1;
        }
    }

    let denominator = required.len() as f64;
    let exact_score = exact_count as f64 / denominator;
    let partial_score = partial_count as f64 / denominator;

    EXACT_MATCH_WEIGHT * exact_score + PARTIAL_MATCH_WEIGHT * partial_score
}

/// Lowercase and trim tokens, dropping duplicates and blanks
fn normalize(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
