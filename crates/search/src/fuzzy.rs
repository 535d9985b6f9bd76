//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions, and
/// substitutions needed to transform `a` into `b`.
///
/// Operates on Unicode scalar values, so `"kaktus"` and `"käktus"` are one
/// substitution apart regardless of byte length. Comparison is
/// case-sensitive; callers wanting case-insensitive behavior normalize
/// first (see [`crate::similarity`]).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows instead of the full (m+1) x (n+1) table.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
