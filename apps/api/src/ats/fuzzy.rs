/// Largest edit distance at which two tokens still count as the same keyword.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Levenshtein distance over chars with unit insert/delete/substitute costs.
///
/// Builds the full (|a|+1) x (|b|+1) matrix; keyword tokens are short.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            matrix[i][j] = if a[i - 1] == b[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j - 1]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j])
            };
        }
    }

    matrix[a.len()][b.len()]
}

/// Similarity heuristic: substring containment either way, or a small edit distance.
pub fn tokens_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a) || edit_distance(a, b) <= MAX_EDIT_DISTANCE
}
