/// Levenshtein distance between two character sequences.
///
/// Insertions, deletions and substitutions all cost 1; there is no
/// transposition. The full `(a.len() + 1) x (b.len() + 1)` table is filled,
/// so cost is `O(a.len() * b.len())` in time and space. Case folding is left
/// to the caller.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let columns = b.len() + 1;
    let mut dp = vec![0usize; (a.len() + 1) * columns];

    for i in 0..=a.len() {
        dp[i * columns] = i;
    }
    for j in 0..=b.len() {
        dp[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i * columns + j] = min3(
                dp[(i - 1) * columns + (j - 1)] + substitution,
                dp[(i - 1) * columns + j] + 1,
                dp[i * columns + (j - 1)] + 1,
            );
        }
    }

    dp[a.len() * columns + b.len()]
}

/// Levenshtein distance between two strings, compared character by character
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

#[inline]
fn min3(a: usize, b: usize, c: usize) -> usize {
    let mut min = a;
    if b < min {
        min = b;
    }
    if c < min {
        min = c;
    }
    min
}
