//! "Did you mean" suggestions for misspelled names.

/// Pick the candidate closest to `name`, or `None` when nothing is close enough.
///
/// Candidates whose length differs from `name` by more than a third are
/// skipped, as are candidates shorter than three characters unless they only
/// differ by case. Case-only differences are much cheaper than other edits.
pub fn get_spelling_suggestion<'a, I>(name: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let name_len = name.chars().count();
    let maximum_length_difference = 2.max((name_len as f64 * 0.34).floor() as usize);
    // Anything worse than this is not worth suggesting.
    let mut best_distance = (name_len as f64 * 0.4).floor() + 1.0;
    let mut best_candidate = None;

    for candidate in candidates {
        let candidate_len = candidate.chars().count();
        if candidate_len.abs_diff(name_len) > maximum_length_difference {
            continue;
        }
        if candidate == name {
            continue;
        }
        if candidate_len < 3 && candidate.to_lowercase() != name.to_lowercase() {
            continue;
        }
        if let Some(distance) = levenshtein_with_max(name, candidate, best_distance - 0.1) {
            debug_assert!(distance < best_distance);
            best_distance = distance;
            best_candidate = Some(candidate);
        }
    }
    best_candidate
}

fn levenshtein_with_max(s1: &str, s2: &str, max: f64) -> Option<f64> {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let mut previous: Vec<f64> = (0..=s2.len()).map(|i| i as f64).collect();
    let mut current = vec![0.0; s2.len() + 1];
    // Any value above `max`; the exact number never matters.
    let big = max + 0.01;

    for i in 1..=s1.len() {
        let c1 = s1[i - 1];
        let i_f = i as f64;
        let min_j = if i_f > max { (i_f - max).ceil() as usize } else { 1 };
        let max_j = if s2.len() as f64 > max + i_f {
            (max + i_f).floor() as usize
        } else {
            s2.len()
        };
        current[0] = i_f;
        let mut col_min = i_f;
        for slot in current.iter_mut().take(min_j).skip(1) {
            *slot = big;
        }
        for j in min_j..=max_j {
            let c2 = s2[j - 1];
            let substitution = if c1.to_lowercase().eq(c2.to_lowercase()) {
                previous[j - 1] + 0.1
            } else {
                previous[j - 1] + 2.0
            };
            let dist = if c1 == c2 {
                previous[j - 1]
            } else {
                (previous[j] + 1.0)
                    .min(current[j - 1] + 1.0)
                    .min(substitution)
            };
            current[j] = dist;
            col_min = col_min.min(dist);
        }
        for slot in current.iter_mut().skip(max_j + 1) {
            *slot = big;
        }
        if col_min > max {
            return None;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let result = previous[s2.len()];
    if result > max {
        None
    } else {
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_match() {
        let candidates = ["Script", "Script_Extensions", "General_Category"];
        assert_eq!(get_spelling_suggestion("Scrpt", candidates), Some("Script"));
    }

    #[test]
    fn prefers_case_difference() {
        let candidates = ["Alpha", "ASCII"];
        assert_eq!(get_spelling_suggestion("Ascii", candidates), Some("ASCII"));
    }

    #[test]
    fn rejects_distant_names() {
        let candidates = ["Lowercase", "Uppercase"];
        assert_eq!(get_spelling_suggestion("Hangul", candidates), None);
    }

    #[test]
    fn skips_exact_match_and_short_names() {
        assert_eq!(get_spelling_suggestion("Lu", ["Lu", "Ll"]), None);
        assert_eq!(get_spelling_suggestion("lu", ["Lu"]), Some("Lu"));
    }
}
