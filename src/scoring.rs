// src/scoring.rs

/// Scores how closely a recognized transcript matches the expected phrase,
/// as an integer percentage. Both inputs are case-folded first; no other
/// normalization, so diacritics and whitespace count. Unweighted Levenshtein
/// over Unicode scalar values:
///
///   similarity = round(100 * (max_len - distance) / max_len)
///
/// Two empty strings are a perfect match by definition. Pure, deterministic,
/// and symmetric in its arguments.
pub fn score_pronunciation(expected: &str, observed: &str) -> u8 {
    let expected: Vec<char> = expected.to_lowercase().chars().collect();
    let observed: Vec<char> = observed.to_lowercase().chars().collect();

    let max_len = expected.len().max(observed.len());
    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein(&expected, &observed);
    (((max_len - distance) as f64 / max_len as f64) * 100.0).round() as u8
}

/// Classic dynamic program with unit insert/delete/substitute costs, kept
/// to two rolling rows. O(|a| * |b|) time, O(|a|) space.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for (j, &bc) in b.iter().enumerate() {
        curr[0] = j + 1;
        for (i, &ac) in a.iter().enumerate() {
            curr[i + 1] = if ac == bc {
                prev[i]
            } else {
                1 + prev[i].min(prev[i + 1]).min(curr[i])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_perfect() {
        assert_eq!(score_pronunciation("vanakkam", "vanakkam"), 100);
        assert_eq!(score_pronunciation("நன்றி", "நன்றி"), 100);
    }

    #[test]
    fn empty_pair_is_perfect_by_definition() {
        assert_eq!(score_pronunciation("", ""), 100);
    }

    #[test]
    fn single_substitution_over_eight_chars() {
        // distance 1, max_len 8 -> round(100 * 7/8) = 88
        assert_eq!(score_pronunciation("vanakkam", "banakkam"), 88);
    }

    #[test]
    fn score_is_symmetric() {
        let pairs = [("vanakkam", "banakkam"), ("nandri", "nanri"), ("a", "")];
        for (x, y) in pairs {
            assert_eq!(score_pronunciation(x, y), score_pronunciation(y, x));
        }
    }

    #[test]
    fn case_differences_do_not_count() {
        assert_eq!(score_pronunciation("Vanakkam", "VANAKKAM"), 100);
    }

    #[test]
    fn score_never_increases_as_edits_accumulate() {
        let expected = "vanakkam";
        let drifts = ["vanakkam", "banakkam", "banakka", "banakk", "bnakk"];
        let scores: Vec<u8> = drifts
            .iter()
            .map(|d| score_pronunciation(expected, d))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(score_pronunciation("abc", "xyz"), 0);
        assert_eq!(score_pronunciation("abc", ""), 0);
    }
}
