//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Case-sensitive and untrimmed. Lengths count chars, not bytes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Full (len(a)+1) x (len(b)+1) grid.
    let mut grid = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in grid.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        grid[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            grid[i][j] = (grid[i - 1][j] + 1)
                .min(grid[i][j - 1] + 1)
                .min(grid[i - 1][j - 1] + cost);
        }
    }

    grid[a.len()][b.len()]
}
